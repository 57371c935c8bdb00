use std::process::ExitCode;

use portfolio_client::{ContactClient, ContactForm, Field, FormStatus};

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [name, email, message] = args.as_slice() else {
        eprintln!("Usage: portfolio-client <name> <email> <message>");
        return ExitCode::FAILURE;
    };

    let client = ContactClient::from_env();
    let mut form = ContactForm::new();
    form.set_field(Field::Name, name.as_str());
    form.set_field(Field::Email, email.as_str());
    form.set_field(Field::Message, message.as_str());

    println!("Sending message to {}", client.base_url());
    form.submit(&client).await;

    match form.status() {
        FormStatus::Success(msg) => {
            println!("{}", msg);
            ExitCode::SUCCESS
        }
        FormStatus::Error(msg) => {
            eprintln!("{}", msg);
            ExitCode::FAILURE
        }
        FormStatus::Idle => ExitCode::FAILURE,
    }
}
