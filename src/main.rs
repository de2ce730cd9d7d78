use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_appender::rolling;

use vacation_scheduler::config::Config;
use vacation_scheduler::controller::{
    AccountForms, BookingForm, Clock, DashboardPage, Outcome, Page,
};
use vacation_scheduler::api::{BookingApi, DashboardApi, HttpBackend};
use vacation_scheduler::notify::Notifier;

mod terminal;

use terminal::{Command, HELP, TerminalNotifier};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(base_url = %config.base_url, "Vacation scheduler starting...");

    let backend = HttpBackend::new(config.base_url.clone())
        .context("Failed to build the http client")?;
    let notifier = TerminalNotifier;

    // clones share the cookie store, so a login carries over to every page
    let form = BookingForm::new(backend.clone(), &notifier);
    let accounts = AccountForms::new(backend.clone(), &notifier);
    let dashboard = DashboardPage::new(backend, &notifier);

    println!("Vacation scheduler on {}. Type `help` for the commands.", config.base_url);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        let outcome = match command {
            Command::Badge(badge) => {
                let outcome = form.lookup(&badge).await;
                show_form(&form);
                outcome
            }
            Command::Book(choice) => form.submit(choice).await,
            Command::Alter(choice) => form.alter(choice).await,
            Command::Cancel => form.cancel().await,
            Command::Approve => form.request_approval().await,
            Command::Other => form.pick_another_date(),
            Command::List => {
                show_form(&form);
                Outcome::Stay
            }
            Command::Login { username, password } => accounts.login(&username, &password).await,
            Command::Register { username, password } => {
                accounts.register(&username, &password).await
            }
            Command::Password(password) => accounts.change_password(&password).await,
            Command::Dashboard => {
                let outcome = dashboard.load().await;
                show_dashboard(&dashboard);
                outcome
            }
            Command::Resolve { id, action } => {
                dashboard.resolve(id, action).await.on_page(Page::Dashboard)
            }
            Command::Purge => dashboard.delete_all().await.on_page(Page::Dashboard),
            Command::Help => {
                println!("{}", HELP);
                Outcome::Stay
            }
            Command::Quit => break,
        };

        match outcome {
            Outcome::Stay => {}
            Outcome::Busy => println!("The previous request is still being sent."),
            Outcome::Reload => println!("Page reloaded."),
            Outcome::Redirect(Page::Dashboard) => {
                dashboard.load().await;
                show_dashboard(&dashboard);
            }
            Outcome::Redirect(Page::Login) => println!("Log in with `login <user> <password>`."),
        }
    }

    info!("Vacation scheduler stopped");
    Ok(())
}

fn show_form<A, N, C>(form: &BookingForm<A, N, C>)
where
    A: BookingApi,
    N: Notifier,
    C: Clock,
{
    if let Some(summary) = form.employee_summary() {
        println!("{}", summary);
    }
    if let Some(view) = form.booking_list() {
        println!("{}", view);
    }
}

fn show_dashboard<A, N>(dashboard: &DashboardPage<A, N>)
where
    A: DashboardApi,
    N: Notifier,
{
    if let Some(view) = dashboard.view() {
        println!("{}", view);
    }
}
