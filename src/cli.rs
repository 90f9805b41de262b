use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mapper_config::{Config, DEFAULT_PROFILE};
use serde_json::Value;

use crate::command::{self, FormatType, MapperOutput};
use crate::logger::Level;
use crate::utils::{
    client::ImporterClientConfig,
    env::{MapperEnv, MapperEnvKey},
};
use crate::{MapperError, MapperResult};

#[derive(Debug, Parser)]
#[command(
    name = "mapper",
    version,
    about = "
mapper - manage the data importers of an importer service

Point mapper at a service by running:

    $ mapper config set --endpoint https://collections.example.org/service/graphql --token <TOKEN>

The most common commands from there are:

    - mapper importer list: List every importer
    - mapper settings show --id <ID>: Show the behavioral settings of an importer
    - mapper settings save --id <ID> --set key=value: Change settings and save
"
)]
pub struct Mapper {
    #[command(subcommand)]
    pub command: Command,

    /// Specify mapper's log level
    #[arg(long = "log", short = 'l', global = true)]
    pub log_level: Option<Level>,

    /// Name of configuration profile to use
    #[arg(long = "profile", global = true, default_value = DEFAULT_PROFILE, env = "MAPPER_PROFILE")]
    pub profile_name: String,

    /// Specify mapper's output format
    #[arg(long = "format", global = true, value_enum, default_value_t = FormatType::Plain)]
    pub format: FormatType,

    #[arg(skip)]
    pub env_store: MapperEnv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration profile commands
    Config(command::Config),

    /// Importer commands
    Importer(command::Importer),

    /// Mapping rule commands
    Mapping(command::Mapping),

    /// Destination bundle commands
    Bundle(command::Bundle),

    /// Importer settings commands
    Settings(command::Settings),
}

impl Mapper {
    pub(crate) fn get_mapper_config(&self) -> MapperResult<Config> {
        let override_home: Option<Utf8PathBuf> = self
            .env_store
            .get(MapperEnvKey::ConfigHome)?
            .map(|p| Utf8PathBuf::from(&p));
        let override_endpoint = self.env_store.get(MapperEnvKey::Endpoint)?;
        let override_token = self.env_store.get(MapperEnvKey::Key)?;
        Ok(Config::new(
            override_home.as_ref(),
            override_endpoint,
            override_token,
        )?)
    }

    pub(crate) fn get_client_config(&self) -> MapperResult<ImporterClientConfig> {
        Ok(ImporterClientConfig::new(self.get_mapper_config()?))
    }

    pub fn run(&self) -> MapperResult<MapperOutput> {
        let context = match &self.command {
            Command::Config(command) => {
                return command.run(self.get_mapper_config()?, &self.profile_name);
            }
            _ => self.get_client_config()?.get_context(&self.profile_name)?,
        };

        // one event loop for the whole command; requests are never concurrent
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async {
            match &self.command {
                Command::Importer(command) => command.run(context).await,
                Command::Mapping(command) => command.run(context).await,
                Command::Bundle(command) => command.run(context).await,
                Command::Settings(command) => command.run(context).await,
                Command::Config(_) => Ok(MapperOutput::EmptySuccess),
            }
        })
    }

    /// Prints the result of [`Mapper::run`] and returns the process exit code.
    ///
    /// A mutation the service rejected is reported as an error. In JSON mode
    /// its data and the error share one envelope.
    pub fn report(&self, result: MapperResult<MapperOutput>) -> i32 {
        let (printed, code) = match result {
            Ok(output) => match output.rejection() {
                None => match output.print(self.format) {
                    Ok(()) => return 0,
                    Err(io_error) => {
                        let error = MapperError::new(io_error);
                        (self.print_error(&error, Value::Null), 1)
                    }
                },
                Some(rejection) => {
                    let error = MapperError::new(rejection);
                    let printed = match self.format {
                        FormatType::Plain => output
                            .print(self.format)
                            .and_then(|()| self.print_error(&error, Value::Null)),
                        FormatType::Json => self.print_error(&error, output.get_data_json()),
                    };
                    (printed, 1)
                }
            },
            Err(error) => {
                tracing::debug!(?error);
                (self.print_error(&error, Value::Null), 1)
            }
        };

        if let Err(io_error) = printed {
            tracing::debug!(?io_error, "could not print result");
        }
        code
    }

    fn print_error(&self, error: &MapperError, data: Value) -> io::Result<()> {
        match self.format {
            FormatType::Plain => error.print(),
            FormatType::Json => writeln!(io::stdout(), "{}", error.get_json_with_data(data)),
        }
    }
}
