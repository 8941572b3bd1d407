use log::LevelFilter;
use log4rs::config::Config as LoggerConfig;
use log4rs::Handle;

pub fn init_logs(level: LevelFilter) -> anyhow::Result<Handle> {
    let config = build_logger_config(level)?;
    Ok(log4rs::init_config(config)?)
}

pub fn build_logger_config(level: LevelFilter) -> Result<LoggerConfig, log4rs::config::runtime::ConfigErrors> {
    use log4rs::append::console::{ConsoleAppender, Target};
    use log4rs::config::{Appender, Root};

    // Logs go to stderr so that the report on stdout stays machine readable.
    LoggerConfig::builder()
        .appender(Appender::builder().build(
            "stderr",
            Box::new(ConsoleAppender::builder().target(Target::Stderr).build()),
        ))
        .build(Root::builder().appender("stderr").build(level))
}
