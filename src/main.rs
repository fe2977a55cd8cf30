mod audio;
mod config;
mod error;
mod library;
mod player;
mod runtime;
mod timefmt;
mod ui;

#[cfg(test)]
mod testing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
