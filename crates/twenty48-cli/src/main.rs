mod command;
mod input;
mod store;
mod tui;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
