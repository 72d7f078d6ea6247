use std::io::stderr;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use clap::{App, Arg};

use rest_client::logger::print::PrintLogger;
use rest_client::{ClientConfig, ContentType, Method, RestClient};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let matches = App::new("rest-client")
        .version(VERSION)
        .about("Performs CRUD requests against a REST resource")
        .arg(
            Arg::with_name("METHOD")
                .short("X")
                .long("method")
                .help("The request method: GET, POST, PUT or DELETE")
                .default_value("GET"),
        )
        .arg(
            Arg::with_name("ID")
                .short("i")
                .long("id")
                .takes_value(true)
                .help("Record ID appended to the base URL"),
        )
        .arg(
            Arg::with_name("DATA")
                .short("d")
                .long("data")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("A body field as key=value, repeatable"),
        )
        .arg(
            Arg::with_name("PARAM")
                .short("s")
                .long("param")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("A search parameter as key=value, repeatable"),
        )
        .arg(
            Arg::with_name("HEADER")
                .short("H")
                .long("header")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("A custom header as 'Name: value', repeatable"),
        )
        .arg(
            Arg::with_name("TIMEOUT")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .validator(is_valid_timeout)
                .help("Maximum request time in seconds [default: 30]"),
        )
        .arg(
            Arg::with_name("CONTENT_TYPE")
                .short("c")
                .long("content-type")
                .default_value("autodetect")
                .help("How to parse the response body: json, xml, autodetect or raw"),
        )
        .arg(
            Arg::with_name("ACCEPT_INVALID_CERT")
                .short("k")
                .long("danger-accept-invalid-certs")
                .help("Controls the use of certificate validation."),
        )
        .arg(
            Arg::with_name("VERBOSE")
                .short("v")
                .long("verbose")
                .help("Log request and response events to stderr"),
        )
        .arg(Arg::with_name("URL").required(true).index(1))
        .usage("rest-client [OPTIONS] <URL>")
        .get_matches();

    let base_url = matches.value_of("URL").unwrap();
    let method: Method = matches.value_of("METHOD").unwrap().parse()?;
    let id = matches.value_of("ID");
    let data = key_value_pairs(matches.values_of("DATA"), '=')?;
    let params = key_value_pairs(matches.values_of("PARAM"), '=')?;
    let headers = key_value_pairs(matches.values_of("HEADER"), ':')?;
    let verbose = matches.is_present("VERBOSE");

    let mut config = ClientConfig::new(base_url);
    config.content_type = ContentType::from(matches.value_of("CONTENT_TYPE").unwrap());
    config.headers = headers;
    config.ssl_check = !matches.is_present("ACCEPT_INVALID_CERT");
    if let Some(timeout) = matches.value_of("TIMEOUT") {
        config.timeout = Some(Duration::from_secs(timeout.parse()?));
    }

    let mut client = RestClient::new(config)?;
    if verbose {
        client = client.with_logger(Box::new(PrintLogger::new(stderr())));
    }

    check_id_usage(method, id)?;

    let content = match (method, id) {
        (Method::Get, Some(id)) => client.get_one(id),
        (Method::Get, None) => client.get_all(&params),
        (Method::Post, _) => client.create(&data),
        (Method::Put, Some(id)) => client.update(&data, id),
        (Method::Put, None) => unreachable!("rejected by check_id_usage"),
        (Method::Delete, id) => client.delete(id, &params),
    }?;

    println!("{}", content);
    Ok(())
}

/// PUT targets one record and needs an ID; POST creates at the base URL
/// and must not get one.
fn check_id_usage(method: Method, id: Option<&str>) -> Result<()> {
    match (method, id) {
        (Method::Put, None) => bail!("PUT requires --id"),
        (Method::Post, Some(_)) => bail!("POST creates at the base URL and does not take --id"),
        _ => Ok(()),
    }
}

fn key_value_pairs(
    values: Option<clap::Values>,
    separator: char,
) -> Result<Vec<(String, String)>> {
    values
        .into_iter()
        .flatten()
        .map(|pair| {
            let (key, value) = pair
                .split_once(separator)
                .ok_or_else(|| anyhow!("expected 'key{}value', got '{}'", separator, pair))?;
            Ok((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

fn is_valid_timeout(val: String) -> std::result::Result<(), String> {
    match val.parse::<u64>() {
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("Timeout is not a valid number of seconds")),
    }
}
