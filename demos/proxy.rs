use flagbind::{bind, Command};
use std::{process, thread, time::Duration};
use tracing_subscriber::EnvFilter;

bind! {
    #[derive(Debug, Default)]
    struct Params {
        user: String { name: "u", usage: "User name", require: true },
        password: String { name: "p", usage: "Password", require: true },
        local_port: u16 { name: "P", usage: "Local port", type: int, default: "1080" },
        mode: String {
            name: "m",
            usage: "Proxy mode",
            require: true,
            type: option,
            options: "global:Global,rule:Rule,auto:Auto",
        },
        verbose: bool { name: "v", usage: "Verbose output", type: bool },
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut params = Params::default();
    let mut cmd = Command::new("Demo proxy client", "Connecting ");
    if !cmd.launch(&mut params) {
        process::exit(1)
    }

    thread::sleep(Duration::from_secs(2));
    cmd.stop_loading();
    println!("{:#?}", params);
}
