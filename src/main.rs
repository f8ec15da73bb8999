use clap::Parser;
use diario::application::{init::init, open_journal, Action, Outcome};
use diario::cli::{format_entry_list, run_session, Cli, Commands};
use diario::domain::EntryId;
use diario::error::DiarioError;
use diario::infrastructure::resolve_root;
use diario::logging::{init_logging, Verbosity};
use std::io;

fn main() {
    let cli = Cli::parse();

    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DiarioError> {
    let root = resolve_root(cli.root)?;

    match cli.command.unwrap_or(Commands::List) {
        Commands::Init => {
            init(&root)?;
            println!("Initialized diario at {}", root.display());
            Ok(())
        }
        Commands::List => {
            let app = open_journal(&root)?;
            print!("{}", format_entry_list(app.entries()));
            Ok(())
        }
        Commands::Add { title, description } => {
            let mut app = open_journal(&root)?;
            app.dispatch(Action::OpenForm);
            app.dispatch(Action::EditTitle(title));
            app.dispatch(Action::EditDescription(description));
            if let Outcome::Added(id) = app.dispatch(Action::Submit) {
                println!("Added entry {}", id);
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let mut app = open_journal(&root)?;
            match app.dispatch(Action::Delete(EntryId::new(id))) {
                Outcome::Removed(id) => println!("Deleted entry {}", id),
                Outcome::NotFound(id) => println!("No entry with id {}", id),
                _ => {}
            }
            Ok(())
        }
        Commands::Shell => {
            let mut app = open_journal(&root)?;
            let mut out = io::stdout().lock();
            run_session(&mut app, io::stdin().lock(), &mut out)
        }
    }
}
