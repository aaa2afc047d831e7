use file_goodies::prelude::*;
use file_goodies::ExplorerConfig;
use std::env;
use std::path::Path;

const USAGE: &str = "\
usage: file-explorer open
       file-explorer dir PATH
       file-explorer select PATH
       file-explorer info PATH";

fn print_info(path: &Path, os: OsFamily) {
    let name = FileName::parse(path);
    println!("path:       {}", path.display());
    println!("stem:       {}", name.stem);
    println!("extension:  {}", name.extension_opt().unwrap_or("-"));
    println!("valid:      {}", has_valid_path(&path.to_string_lossy(), os));
    println!("executable: {}", is_os_executable(&RealFileSystem, path, os));
    println!("short:      {}", shortened_file_path_default(path, 2));
}

fn run(args: &[String]) -> Result<Option<bool>> {
    let os = OsFamily::current();
    let config = ExplorerConfig::from_env()?;
    let explorer = explorers::get_with(
        os,
        config,
        file_goodies::StdProcessRunner,
        RealFileSystem,
    );
    log::debug!("platform {os}, waiting up to {:?}", config.wait);

    let opened = match args {
        [cmd] if cmd == "open" => explorer.open()?,
        [cmd, path] if cmd == "dir" => explorer.open_directory(Path::new(path))?,
        [cmd, path] if cmd == "select" => explorer.open_and_select(Path::new(path))?,
        [cmd, path] if cmd == "info" => {
            print_info(Path::new(path), os);
            return Ok(Some(true));
        }
        _ => return Ok(None),
    };
    Ok(Some(opened))
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(Some(true)) => {}
        Ok(Some(false)) => {
            eprintln!("file-explorer: nothing was opened");
            std::process::exit(2);
        }
        Ok(None) => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("file-explorer: {err}");
            std::process::exit(1);
        }
    }
}
