//! Address Book - demo driver
//!
//! Walks through every address book operation and prints the results to
//! stdout. Logs go to stderr.

use address_book::{AddressBook, AddressBookError, Config, Record};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout carries the demo output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(records_per_page = config.records_per_page, "Configuration loaded");

    if let Err(e) = run(&config) {
        error!("Demo failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn run(config: &Config) -> Result<(), AddressBookError> {
    let mut book = AddressBook::from_config(config)?;

    println!("== 1 ==");
    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;

    println!("== 2 ==");
    book.add_record(john);

    println!("== 3 ==");
    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    println!("== 4 ==");
    for record in book.records() {
        println!("{}", record);
    }

    println!("== 5 ==");
    let john = book.find_mut("John")?;
    println!("john = {}", john);
    john.edit_phone("1234567890", "1112223333")?;

    println!("== 6 ==");
    println!("{}", john);

    println!("== 7 ==");
    let found_phone = john.find_phone("5555555555")?;
    println!("{}: {}", john.name(), found_phone);

    println!("== 8 ==");
    book.delete("Jane")?;

    println!("== 9 ==");
    let john = book.find_mut("John")?;
    john.add_birthday((1990, 9, 11))?;
    if let Some(birthday) = john.birthday() {
        println!("John birthday: {}", birthday);
    }

    println!("== 10 ==");
    if let Some(days) = john.days_to_birthday() {
        println!("Days to birthday: {}", days);
    }

    println!("== 11 ==");
    let mut jane = Record::with_birthday("Jane", (1995, 5, 1))?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);
    println!("{}", book);

    println!("== 12 ==");
    let more = [
        ("Bob", (1988, 12, 11), "9876543888"),
        ("Steve", (1999, 6, 18), "9876543888"),
        ("Jill", (1992, 3, 13), "9812345698"),
        ("Meg", (1998, 7, 11), "1232345698"),
        ("Alice", (1996, 9, 20), "8642345698"),
    ];
    for (name, birthday, phone) in more {
        let mut record = Record::with_birthday(name, birthday)?;
        record.add_phone(phone)?;
        book.add_record(record);
    }

    book.set_records_per_page(2)?;
    let mut page = 1;
    loop {
        match book.next_page() {
            Ok(text) => {
                println!("{}", text);
                println!("End of page {}", page);
                page += 1;
            }
            Err(AddressBookError::Exhausted) => break,
            Err(e) => return Err(e),
        }
    }

    println!("== 13 ==");
    let records: Vec<&Record> = book.records().collect();
    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to render records as JSON: {}", e),
    }

    Ok(())
}
