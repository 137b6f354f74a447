use clap::{App, Arg};

use dns_packet::message::Message;

// cargo run --example dns_decode -- demos/google_response_packet.bin

fn main() {
    env_logger::init();

    let mut app = App::new("DNS decode")
        .version("0.1.0")
        .author("Rain Liu <yuliu@webrtc.rs>")
        .about("An example of decoding a captured DNS packet")
        .arg(
            Arg::with_name("FULLHELP")
                .help("Prints more detailed help information")
                .long("fullhelp"),
        )
        .arg(
            Arg::with_name("file")
                .required_unless("FULLHELP")
                .takes_value(true)
                .index(1)
                .help("File holding one raw DNS message, e.g. 'demos/google_response_packet.bin'"),
        );

    let matches = app.clone().get_matches();

    if matches.is_present("FULLHELP") {
        app.print_long_help().unwrap();
        std::process::exit(0);
    }

    let path = matches.value_of("file").unwrap();
    let raw = match std::fs::read(path) {
        Ok(d) => d,
        Err(e) => panic!("Unable to read {path}: {e}"),
    };

    let mut message = Message::default();
    match message.unpack(&raw) {
        Ok(_) => println!("{message}"),
        Err(e) => panic!("Unable to decode message: {e}"),
    }
}
