use std::path::PathBuf;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut data_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                data_path = args.next().map(PathBuf::from);
                if data_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("contacts-book - interactive contact manager");
                println!();
                println!("Usage: contacts-book [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Contacts file path (default: .data/contacts.json)");
                println!("  -h, --help          Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let data_path = data_path.unwrap_or_else(|| PathBuf::from(".data").join("contacts.json"));

    contacts_book::cli::run(&data_path);
}
