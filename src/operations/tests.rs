mod flight;
mod utils;
