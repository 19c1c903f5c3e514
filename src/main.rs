use clap::Parser;
use miette::Result;
use sigma::cli::{self, Cli, Commands};
use sigma::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_json(cli.global.json);
    let global = &cli.global;

    match cli.command {
        Commands::Thumbnail(args) => cli::thumbnail::run(args, global, &printer)?,
        Commands::Banner(args) => cli::banner::run(args, global, &printer)?,
        Commands::Social(args) => cli::social::run(args, global, &printer)?,
        Commands::Carousel(args) => cli::carousel::run(args, global, &printer)?,
        Commands::Export(args) => cli::export::run(args, global, &printer)?,
        Commands::Palette(args) => cli::palette::run(args, global, &printer)?,
        Commands::Platforms(args) => cli::platforms::run(args, global, &printer)?,
        Commands::Init(args) => cli::init::run(args, &printer)?,
        Commands::Completions(args) => cli::completions::run(args)?,
    }

    Ok(())
}
