use std::env;
use std::ffi::OsString;
use std::io;
use std::path::Path;

use dsgen::{App, Catalog, Config, Console, SystemClock};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = env::args_os();
    let argv0 = args.next();
    let rest: Vec<OsString> = args.collect();

    let config = Config::from_env(argv0.as_deref().map(Path::new));
    let catalog = Catalog::builtin();
    let clock = SystemClock;

    let mut console = Console::new(io::stdout().lock());
    let code = App::new(&config, &catalog, &clock).run(&rest, &mut console);
    std::process::exit(code);
}
