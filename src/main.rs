mod cli;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    // eprintln!("{command_line_interface:#?}");
    command_line_interface.run()
}
