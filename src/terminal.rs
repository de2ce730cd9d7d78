use std::io::{self, BufRead, Write};
use std::str::FromStr;

use strum_macros::{Display, EnumString};
use vacation_scheduler::controller::DateChoice;
use vacation_scheduler::model::approval::ApprovalAction;
use vacation_scheduler::notify::{Level, Notifier};

pub const HELP: &str = "\
badge <number>              look up an employee
book <YYYY-MM-DD> <days>    book a vacation
alter <YYYY-MM-DD> <days>   move the existing booking
cancel                      cancel the existing booking
approve                     send the conflicting request to a supervisor
other                       dismiss the conflict and pick another date
list                        show the employee and the booking list
login <user> <password>     log in
register <user> <password>  create an account
password <new password>     change the password
dashboard                   show the supervisor dashboard
resolve <id> approve|reject answer an approval request
purge                       delete every booking
help                        this text
quit                        leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum Verb {
    Badge,
    Book,
    Alter,
    Cancel,
    Approve,
    Other,
    List,
    Login,
    Register,
    Password,
    Dashboard,
    Resolve,
    Purge,
    Help,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Badge(String),
    Book(DateChoice),
    Alter(DateChoice),
    Cancel,
    Approve,
    Other,
    List,
    Login { username: String, password: String },
    Register { username: String, password: String },
    Password(String),
    Dashboard,
    Resolve { id: u64, action: ApprovalAction },
    Purge,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or_else(|| "Type `help` for the commands.".to_string())?;
        let verb = Verb::from_str(&first.to_lowercase())
            .map_err(|_| format!("Unknown command `{}`. Type `help` for the commands.", first))?;
        let args: Vec<&str> = words.collect();

        let command = match (verb, args.as_slice()) {
            // the lookup itself warns about a blank badge
            (Verb::Badge, rest) => Command::Badge(rest.join(" ")),
            (Verb::Book, [date, days]) => Command::Book(date_choice(date, days)?),
            (Verb::Alter, [date, days]) => Command::Alter(date_choice(date, days)?),
            (Verb::Cancel, []) => Command::Cancel,
            (Verb::Approve, []) => Command::Approve,
            (Verb::Other, []) => Command::Other,
            (Verb::List, []) => Command::List,
            (Verb::Login, [user, pass]) => Command::Login {
                username: user.to_string(),
                password: pass.to_string(),
            },
            (Verb::Register, [user, pass]) => Command::Register {
                username: user.to_string(),
                password: pass.to_string(),
            },
            (Verb::Password, [pass]) => Command::Password(pass.to_string()),
            (Verb::Dashboard, []) => Command::Dashboard,
            (Verb::Resolve, [id, action]) => Command::Resolve {
                id: id
                    .parse()
                    .map_err(|_| format!("`{}` is not a request id.", id))?,
                action: ApprovalAction::from_str(&action.to_lowercase())
                    .map_err(|_| format!("`{}` is neither approve nor reject.", action))?,
            },
            (Verb::Purge, []) => Command::Purge,
            (Verb::Help, _) => Command::Help,
            (Verb::Quit, _) => Command::Quit,
            (verb, _) => return Err(format!("Wrong arguments for `{}`. Type `help`.", verb)),
        };
        Ok(command)
    }
}

fn date_choice(date: &str, days: &str) -> Result<DateChoice, String> {
    DateChoice::parse(date, days).map_err(|e| e.to_string())
}

/// Popups printed on stdout; confirmations read a y/n answer from stdin.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, level: Level, title: &str, text: &str) {
        println!("[{}] {}: {}", level, title, text);
    }

    fn confirm(&self, title: &str, text: &str) -> bool {
        print!("{}: {} [y/N] ", title, text);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}
