use std::{
    io::{BufWriter, stdout},
    path::PathBuf,
};

use clap::Parser;

use crate::{
    common::{
        clock::{Clock, SystemClock},
        error::AppError,
        event::LedgerCommand,
    },
    config::load_config,
    domain::{goal::Celebration, ledger::Ledger},
    io::{
        avatar::{AvatarStore, DataUrlAvatarStore},
        reader, writer,
    },
    worker::processor::Processor,
};

/// Replay a day's sales commands and export the standings as CSV.
#[derive(Parser, Debug)]
#[command(name = "sales-tracker", version)]
pub struct Cli {
    /// CSV file with `command,consultant,segment,amount` rows
    pub commands: PathBuf,
    /// Session config (TOML); built-in defaults when omitted
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Avatar image (png or jpeg) for a consultant; repeatable
    #[arg(long = "avatar", value_name = "ID=PATH", value_parser = parse_avatar_arg)]
    pub avatars: Vec<(String, PathBuf)>,
}

fn parse_avatar_arg(raw: &str) -> Result<(String, PathBuf), String> {
    match raw.split_once('=') {
        Some((id, path)) if !id.trim().is_empty() && !path.trim().is_empty() => {
            Ok((id.trim().to_string(), PathBuf::from(path.trim())))
        }
        _ => Err(format!("expected ID=PATH, got `{raw}`")),
    }
}

/// Encodes `payload` through `store` and attaches the result to the
/// consultant. Nothing is encoded for an unknown consultant.
pub fn upload_avatar<S: AvatarStore, C: Clock>(
    processor: &mut Processor<C>,
    ledger: &mut Ledger,
    store: &mut S,
    consultant: &str,
    payload: &[u8],
) -> Result<(), AppError> {
    ledger.consultant(consultant)?;
    let avatar = store.store(consultant, payload)?;
    processor.process(
        ledger,
        LedgerCommand::SetAvatar {
            consultant: consultant.to_string(),
            avatar,
        },
    )?;
    Ok(())
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let config = load_config(cli.config.as_deref())?;

    let file = std::fs::File::open(&cli.commands)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    let commands = reader::read_commands(&mut reader);

    let mut ledger = Ledger::new(&config);
    let mut processor =
        Processor::with_clock(SystemClock, Celebration::new(config.celebration_lifetime()));

    let mut avatars = DataUrlAvatarStore;
    for (consultant, path) in &cli.avatars {
        let payload = std::fs::read(path)?;
        // a bad picture should not stop the day's export
        if let Err(e) =
            upload_avatar(&mut processor, &mut ledger, &mut avatars, consultant, &payload)
        {
            tracing::warn!(
                consultant = %consultant,
                path = %path.display(),
                error = %e,
                "avatar rejected"
            );
        }
    }

    for command in commands {
        let command = command.map_err(AppError::Parse)?;
        // rejected commands leave the ledger as it was; keep replaying
        if let Err(e) = processor.process(&mut ledger, command) {
            tracing::warn!(error = %e, "command rejected");
        }
    }

    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    writer::write_standings(writer, &ledger)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::error::LedgerError,
        io::avatar::{AvatarError, AvatarRef},
    };

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\nimage-bytes";

    #[test]
    fn upload_avatar_attaches_encoded_image() {
        let mut processor = Processor::new();
        let mut ledger = Ledger::default();
        let mut store = DataUrlAvatarStore;

        upload_avatar(&mut processor, &mut ledger, &mut store, "consultant-2", PNG).unwrap();

        let avatar = ledger.consultant("consultant-2").unwrap().avatar.as_ref();
        assert!(
            avatar
                .map(AvatarRef::as_str)
                .is_some_and(|s| s.starts_with("data:image/png;base64,"))
        );
    }

    #[test]
    fn upload_avatar_rejects_unknown_consultant_and_bad_format() {
        let mut processor = Processor::new();
        let mut ledger = Ledger::default();
        let mut store = DataUrlAvatarStore;

        let err =
            upload_avatar(&mut processor, &mut ledger, &mut store, "ghost", PNG).unwrap_err();
        assert!(matches!(
            err,
            AppError::Ledger(LedgerError::UnknownConsultant(_))
        ));

        let gif = b"GIF89a";
        let err = upload_avatar(&mut processor, &mut ledger, &mut store, "consultant-2", gif)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Avatar(AvatarError::UnsupportedFormat)
        ));
        assert!(ledger.consultant("consultant-2").unwrap().avatar.is_none());
    }

    #[test]
    fn avatar_flag_is_parsed() {
        let cli = Cli::try_parse_from([
            "sales-tracker",
            "day.csv",
            "--avatar",
            "consultant-0=/tmp/petr.png",
            "--avatar",
            "consultant-3=ann.jpg",
        ])
        .unwrap();
        assert_eq!(
            cli.avatars,
            vec![
                ("consultant-0".to_string(), PathBuf::from("/tmp/petr.png")),
                ("consultant-3".to_string(), PathBuf::from("ann.jpg")),
            ]
        );
        assert!(Cli::try_parse_from(["sales-tracker", "day.csv", "--avatar", "nopath"]).is_err());
    }
}
