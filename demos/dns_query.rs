use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use clap::{App, AppSettings, Arg};
use dns_packet::config::*;
use dns_packet::conn::*;
use dns_packet::message::DnsType;
use dns_packet::Error;

// cargo run --example dns_query -- google.com --type MX

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let mut app = App::new("DNS Query")
        .version("0.1.0")
        .author("Rain Liu <yuliu@webrtc.rs>")
        .about("An example of a single DNS query over UDP")
        .setting(AppSettings::DeriveDisplayOrder)
        .arg(
            Arg::with_name("FULLHELP")
                .help("Prints more detailed help information")
                .long("fullhelp"),
        )
        .arg(
            Arg::with_name("name")
                .required_unless("FULLHELP")
                .takes_value(true)
                .index(1)
                .help("Domain name to resolve, e.g. 'google.com'"),
        )
        .arg(
            Arg::with_name("type")
                .takes_value(true)
                .default_value("A")
                .long("type")
                .help("Record type: A, AAAA, NS, CNAME, MX or TYPEnnn"),
        )
        .arg(
            Arg::with_name("server")
                .takes_value(true)
                .default_value("8.8.8.8:53")
                .long("server")
                .help("Resolving server"),
        )
        .arg(
            Arg::with_name("timeout")
                .takes_value(true)
                .default_value("5")
                .long("timeout")
                .help("Seconds to wait for the response"),
        );

    let matches = app.clone().get_matches();

    if matches.is_present("FULLHELP") {
        app.print_long_help().unwrap();
        std::process::exit(0);
    }

    let name = matches.value_of("name").unwrap();
    let typ = DnsType::from_str(matches.value_of("type").unwrap())?;
    let server = SocketAddr::from_str(matches.value_of("server").unwrap())?;
    let timeout = matches
        .value_of("timeout")
        .unwrap()
        .parse::<u64>()
        .map(Duration::from_secs)
        .unwrap_or_default();

    let conn = DnsConn::bind(Config {
        server,
        timeout,
        ..Default::default()
    })
    .await?;
    println!("Local address: {}", conn.local_addr()?);
    println!("Querying {server} for {typ} records of {name}");

    let response = conn.query(name, typ).await?;
    println!("{response}");

    Ok(())
}
