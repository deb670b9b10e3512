use crate::airport::Weather;
use crate::error::{Invalid, OpsError};
use crate::event::Event;
use crate::operations::administrator::Administrator;
use crate::operations::walkthrough;
use chrono::NaiveDateTime;
use clap::Parser;
use colored::{ColoredString, Colorize};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::Tabled;
use tabled::settings::Style;

mod aircraft;
mod airport;
mod crew;
mod employee;
mod error;
mod event;
mod flight;
mod operations;
mod person;
mod report;

#[derive(Parser)]
#[command(name = "aeroflot")]
#[command(about = "Airline flight operations console")]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,

    /// Run the scripted walkthrough and exit
    #[arg(long)]
    demo: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

/// Diagnostics go to stderr so the console output stays clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "aeroflot=warn".into()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(pager) => pager,
        Err(e) => {
            tracing::warn!("no pager available: {}", e);
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn show<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("Nothing to list.");
        return;
    }
    let long = rows.len() > 20;
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if long {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

fn paint(event: &Event) -> ColoredString {
    let line = event.to_string();
    match event {
        Event::WeatherWarning { .. } => line.yellow(),
        Event::FlightCancelled { .. } | Event::Emergency { .. } | Event::Rerouted { .. } => {
            line.red().bold()
        }
        Event::FlightCompleted { .. } => line.green(),
        Event::IssueReported { .. } => line.bold(),
        _ => line.normal(),
    }
}

/// Prints everything the last command recorded, then its error if any.
fn print_outcome<T>(admin: &mut Administrator, outcome: Result<T, OpsError>) {
    for event in admin.drain_journal() {
        println!("{}", paint(&event));
    }
    match outcome {
        Ok(_) => {}
        Err(OpsError::Refused(refusal)) => println!("{}", refusal.to_string().yellow()),
        Err(OpsError::Invalid(invalid)) => println!("{}", invalid.to_string().red()),
    }
}

fn parse_time(raw: Option<&&str>) -> Result<NaiveDateTime, Invalid> {
    match raw {
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .map_err(|_| Invalid::BadTime(s.to_string())),
        None => Ok(chrono::Local::now().naive_local()),
    }
}

fn run_demo(admin: &mut Administrator) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    walkthrough::run(admin, &mut stdout.lock())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let scenario = args.scenario.to_string_lossy().to_string();
    let mut admin = Administrator::load_from_file(&scenario)?;

    if args.demo {
        run_demo(&mut admin)?;
        return Ok(());
    }

    println!(
        "Operations control online. Administrator {} loaded {} airports, {} aircraft, {} staff from {}",
        admin.name,
        admin.registry.airports.len(),
        admin.registry.aircraft.len(),
        admin.registry.employees.len(),
        args.scenario.display()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: [
            "ls", "flight", "crew", "enlist", "assign", "board", "weather", "check", "issue",
            "fly", "cancel", "status", "show", "summary", "demo", "help", "exit",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => match parts.get(1).copied().unwrap_or("f") {
                        "c" | "crews" => show(report::crews(&admin)),
                        "e" | "employees" => show(report::employees(&admin)),
                        "a" | "airports" => show(report::airports(&admin)),
                        "ac" | "aircraft" => show(report::aircraft(&admin)),
                        "p" | "passengers" => show(report::passengers(&admin)),
                        _ => show(report::flights(&admin)),
                    },
                    "flight" => {
                        if let (Some(number), Some(from), Some(to), Some(aircraft)) =
                            (parts.get(1), parts.get(2), parts.get(3), parts.get(4))
                        {
                            let outcome = parse_time(parts.get(5))
                                .map_err(OpsError::from)
                                .and_then(|time| {
                                    admin
                                        .create_flight(number, from, to, time, aircraft)
                                        .map(|_| ())
                                });
                            print_outcome(&mut admin, outcome);
                        } else {
                            println!("Usage: flight <number> <from> <to> <aircraft> [YYYY-MM-DDTHH:MM]");
                        }
                    },
                    "crew" => {
                        if let Some(id) = parts.get(1) {
                            let outcome = admin.form_crew(id).map(|_| ());
                            print_outcome(&mut admin, outcome);
                        } else {
                            println!("Usage: crew <crew_id>");
                        }
                    },
                    "enlist" => {
                        if let (Some(crew), true) = (parts.get(1), parts.len() > 2) {
                            for employee in &parts[2..] {
                                let outcome = admin.enlist(crew, employee);
                                print_outcome(&mut admin, outcome);
                            }
                        } else {
                            println!("Usage: enlist <crew_id> <staff_no>...");
                        }
                    },
                    "assign" => {
                        if let (Some(crew), Some(flight)) = (parts.get(1), parts.get(2)) {
                            let outcome = admin.assign_crew_to_flight(crew, flight);
                            print_outcome(&mut admin, outcome);
                        } else {
                            println!("Usage: assign <crew_id> <flight>");
                        }
                    },
                    "board" => {
                        if let (Some(flight), true) = (parts.get(1), parts.len() > 2) {
                            for ticket in &parts[2..] {
                                let outcome = admin.add_passenger(flight, ticket);
                                print_outcome(&mut admin, outcome);
                            }
                        } else {
                            println!("Usage: board <flight> <ticket>...");
                        }
                    },
                    "weather" => {
                        if let (Some(code), true) = (parts.get(1), parts.len() > 2) {
                            let outcome = parts[2..]
                                .join(" ")
                                .parse::<Weather>()
                                .map_err(OpsError::from)
                                .and_then(|w| admin.set_weather(code, w));
                            print_outcome(&mut admin, outcome);
                        } else {
                            let names: Vec<String> = Weather::ALL
                                .iter()
                                .map(|w| format!("{:?}", w).to_lowercase())
                                .collect();
                            println!("Usage: weather <airport> <{}>", names.join("|"));
                        }
                    },
                    "check" => {
                        if let Some(flight) = parts.get(1) {
                            let outcome = admin.check_weather(flight);
                            let cleared = matches!(outcome, Ok(true))
                                && admin
                                    .flight(flight)
                                    .is_ok_and(|f| !f.status().is_cancelled());
                            if cleared {
                                println!("{}", format!("weather permits flight {}", flight).green());
                            }
                            print_outcome(&mut admin, outcome);
                        } else {
                            println!("Usage: check <flight>");
                        }
                    },
                    "issue" => {
                        if let (Some(pilot), Some(flight), true) =
                            (parts.get(1), parts.get(2), parts.len() > 3)
                        {
                            let issue = parts[3..].join(" ");
                            let outcome = admin.report_technical_issue(pilot, flight, &issue);
                            print_outcome(&mut admin, outcome);
                        } else {
                            println!("Usage: issue <staff_no> <flight> <description>");
                        }
                    },
                    "fly" => {
                        if let Some(flight) = parts.get(1) {
                            let outcome = admin.execute_flight(flight);
                            print_outcome(&mut admin, outcome);
                        } else {
                            println!("Usage: fly <flight>");
                        }
                    },
                    "cancel" => {
                        if let (Some(flight), true) = (parts.get(1), parts.len() > 2) {
                            let reason = parts[2..].join(" ");
                            let outcome = admin.cancel_flight(flight, &reason);
                            print_outcome(&mut admin, outcome);
                        } else {
                            println!("Usage: cancel <flight> <reason>");
                        }
                    },
                    "status" => {
                        if let Some(flight) = parts.get(1) {
                            let outcome = admin.flight_status(flight);
                            print_outcome(&mut admin, outcome);
                        } else {
                            println!("Usage: status <flight>");
                        }
                    },
                    "show" => {
                        if let Some(id) = parts.get(1) {
                            match admin.crew(id) {
                                Ok(crew) => {
                                    println!("{}", crew.describe(&admin.registry.employees));
                                    let complete = crew.is_complete(&admin.registry.employees);
                                    println!("complete: {}", complete);
                                }
                                Err(e) => println!("{}", e.to_string().red()),
                            }
                        } else {
                            println!("Usage: show <crew_id>");
                        }
                    },
                    "summary" => {
                        admin.summary().iter().for_each(|line| println!("* {}", line));
                    },
                    "demo" => {
                        // fresh copy of the scenario, the session keeps its own state
                        let outcome = Administrator::load_from_file(&scenario)
                            .map_err(|e| e.to_string())
                            .and_then(|mut fresh| {
                                run_demo(&mut fresh).map_err(|e| e.to_string())
                            });
                        if let Err(e) = outcome {
                            println!("{}", e.red());
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls [f|c|e|a|ac|p]        - List flights, crews, employees, airports, aircraft or passengers");
                        println!("  flight <no> <from> <to> <ac> [time] - Create a flight (time as YYYY-MM-DDTHH:MM)");
                        println!("  crew <id>                - Start forming a crew");
                        println!("  enlist <crew> <staff>... - Add employees to the crew slot matching their duty");
                        println!("  assign <crew> <flight>   - Assign a complete crew to a flight");
                        println!("  board <flight> <tkt>...  - Add passengers to a flight");
                        println!("  weather <airport> <cond> - Set airport weather");
                        println!("  check <flight>           - Check weather at both ends, cancelling if needed");
                        println!("  issue <staff> <flight> <text> - Pilot reports a technical issue");
                        println!("  fly <flight>             - Execute a flight");
                        println!("  cancel <flight> <reason> - Cancel a flight");
                        println!("  status <flight>          - Show flight status");
                        println!("  show <crew>              - Show crew members");
                        println!("  summary                  - One line per flight");
                        println!("  demo                     - Run the scripted walkthrough");
                        println!("  help / ?                 - Show this help menu");
                        println!("  exit / quit              - Exit the console\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
