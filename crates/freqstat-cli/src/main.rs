mod command;
mod input;
mod report;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
