use miette::{IntoDiagnostic, Result, WrapErr};
use owo_colors::OwoColorize;
use time::{
    format_description::{self, FormatItem},
    OffsetDateTime, UtcOffset,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{format, FmtContext, FormatEvent, FormatFields, MakeWriter},
    registry::LookupSpan,
    FmtSubscriber,
};

/// Initialize the logging system.
///
/// Logs go to stderr, stdout is where the page is rendered.
/// Must be called before spawning any thread, the local offset cannot be read afterwards.
pub fn init_logging(level: Level, color: bool) -> Result<()> {
    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let subscriber = build_subscriber(local_offset, level, color, std::io::stderr)?;

    tracing::subscriber::set_global_default(subscriber)
        .into_diagnostic()
        .wrap_err("Setting default subscriber failed")
}

fn build_subscriber<W>(
    offset: UtcOffset,
    level: Level,
    color: bool,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + 'static>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let my_pretty_logger = MyPrettyLogger::new(offset)?;

    // The ANSI switch lives on the default format, it must be set before replacing it
    Ok(FmtSubscriber::builder()
        .with_ansi(color)
        .with_max_level(level)
        .with_writer(writer)
        .event_format(my_pretty_logger)
        .finish())
}

/// Custom logger as the default ones are not as customizable as I want
struct MyPrettyLogger {
    offset: UtcOffset,
    time_format: Vec<FormatItem<'static>>,
}

impl MyPrettyLogger {
    fn new(offset: UtcOffset) -> Result<Self> {
        Ok(Self {
            offset,
            time_format: format_description::parse("[hour]:[minute]:[second]")
                .into_diagnostic()
                .wrap_err("Invalid log time format")?,
        })
    }
}

impl<S, N> FormatEvent<S, N> for MyPrettyLogger
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        let now = OffsetDateTime::now_utc().to_offset(self.offset).time();
        let now = now
            .format(&self.time_format)
            .map_err(|_| std::fmt::Error)?;
        let thread = std::thread::current();
        let thread_name = thread.name().unwrap_or("?");

        // Pad before coloring, escape codes would count in the width
        let level = format!("{:>5}", metadata.level());

        if writer.has_ansi_escapes() {
            let level = match *metadata.level() {
                Level::ERROR => level.red().to_string(),
                Level::WARN => level.yellow().to_string(),
                Level::DEBUG => level.blue().to_string(),
                _ => level.green().to_string(),
            };

            write!(&mut writer, "{} {} {} ", now, level, thread_name.yellow())?;
        } else {
            write!(&mut writer, "{} {} {} ", now, level, thread_name)?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
