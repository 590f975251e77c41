use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::{monitor::MonitorRepository, seen_clip::SeenClipRepository},
    error::AppError,
    model::{Monitor, MonitorKey},
    service::ClipSink,
    twitch::ClipSource,
};


/// Upper bound on pages walked per poll run.
///
/// Upstream pagination is not trusted to terminate; without a cap a single
/// run could walk the broadcaster's entire clip history every tick.
const MAX_PAGES_PER_RUN: usize = 10;

/// Minimum delay between page fetches within one run, for upstream rate limits.
const PAGE_DELAY: Duration = Duration::from_millis(1000);

/// In-flight markers for monitors currently being polled.
///
/// The single point of truth for per-key exclusivity: a tick that finds a key
/// marked skips it entirely, so overlapping page-walks for the same
/// (guild, twitch channel) pair cannot happen. Check-and-set is atomic under
/// one lock; the lock is never held across an await.
pub struct InFlightSet {
    keys: Mutex<HashSet<MonitorKey>>,
}

impl InFlightSet {
    pub fn new() -> Self {
        Self {
            keys: Mutex::new(HashSet::new()),
        }
    }

    /// Marks a key in-flight. Returns false when it already was.
    pub fn try_acquire(&self, key: &MonitorKey) -> bool {
        self.keys
            .lock()
            .expect("in-flight lock poisoned")
            .insert(key.clone())
    }

    /// Returns a key to idle. Must be called on every exit path of a run.
    pub fn release(&self, key: &MonitorKey) {
        self.keys
            .lock()
            .expect("in-flight lock poisoned")
            .remove(key);
    }
}

impl Default for InFlightSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts the clip poll scheduler.
///
/// Runs a tick every minute. Each tick reads all monitored channels and polls
/// them for new clips; per-monitor failures are logged and retried on the
/// next tick, never propagated out of the job.
///
/// # Arguments
/// - `db`: Database connection
/// - `source`: Twitch client used to resolve broadcasters and fetch clips
/// - `sink`: Publisher used to deliver clip notifications
pub async fn start_scheduler<S, N>(
    db: DatabaseConnection,
    source: Arc<S>,
    sink: Arc<N>,
) -> Result<(), AppError>
where
    S: ClipSource + Send + Sync + 'static,
    N: ClipSink + Send + Sync + 'static,
{
    let scheduler = JobScheduler::new().await?;
    let in_flight = Arc::new(InFlightSet::new());

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();
        let source = source.clone();
        let sink = sink.clone();
        let in_flight = in_flight.clone();

        Box::pin(async move {
            if let Err(e) = run_tick(&db, source, sink, in_flight).await {
                tracing::error!("Error running clip poll tick: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Clip poll scheduler started");

    Ok(())
}

/// Runs one tick: polls every monitor whose key is idle.
///
/// Monitors run concurrently as spawned tasks; the tick waits for the runs it
/// started, but per-key exclusivity (not tick completion) is what gates the
/// next tick's work. A key is always released when its run finishes,
/// successfully or not.
async fn run_tick<S, N>(
    db: &DatabaseConnection,
    source: Arc<S>,
    sink: Arc<N>,
    in_flight: Arc<InFlightSet>,
) -> Result<(), AppError>
where
    S: ClipSource + Send + Sync + 'static,
    N: ClipSink + Send + Sync + 'static,
{
    let monitors = MonitorRepository::new(db).get_all().await?;

    let mut runs = Vec::new();

    for monitor in monitors {
        let key = monitor.key();

        if !in_flight.try_acquire(&key) {
            tracing::debug!(
                "Poll already in flight for '{}' in guild {}, skipping",
                monitor.twitch_channel,
                monitor.guild_id
            );
            continue;
        }

        let db = db.clone();
        let source = source.clone();
        let sink = sink.clone();
        let in_flight = in_flight.clone();

        runs.push(tokio::spawn(async move {
            if let Err(e) = poll_monitor(&db, source.as_ref(), sink.as_ref(), &monitor).await {
                tracing::error!(
                    "Error polling '{}' for guild {}: {}",
                    monitor.twitch_channel,
                    monitor.guild_id,
                    e
                );
            }

            in_flight.release(&key);
        }));
    }

    for run in runs {
        // A panicked run only loses its own monitor's tick; the marker was
        // already handed to the task, so log and move on.
        if let Err(e) = run.await {
            tracing::error!("Clip poll task failed: {}", e);
        }
    }

    Ok(())
}

/// Polls one monitor: resolve the broadcaster, then walk clip pages.
///
/// Pages are followed by cursor until the upstream reports no next page or
/// `MAX_PAGES_PER_RUN` is reached. Each unseen clip is published and then
/// recorded as seen; a delivery failure is logged and the clip is still
/// recorded, so a broken destination cannot cause repeated posts.
async fn poll_monitor<S, N>(
    db: &DatabaseConnection,
    source: &S,
    sink: &N,
    monitor: &Monitor,
) -> Result<(), AppError>
where
    S: ClipSource + Send + Sync,
    N: ClipSink + Send + Sync,
{
    let Some(broadcaster_id) = source.resolve_broadcaster_id(&monitor.twitch_channel).await? else {
        tracing::warn!(
            "No Twitch user found for '{}', monitored by guild {}",
            monitor.twitch_channel,
            monitor.guild_id
        );
        return Ok(());
    };

    let seen = SeenClipRepository::new(db);
    let mut cursor: Option<String> = None;

    for page_index in 0..MAX_PAGES_PER_RUN {
        if page_index > 0 {
            tokio::time::sleep(PAGE_DELAY).await;
        }

        let page = source
            .fetch_clips_page(&broadcaster_id, cursor.as_deref())
            .await?;

        for clip in &page.clips {
            if seen.is_seen(&monitor.guild_id, &clip.id).await? {
                continue;
            }

            if let Err(e) = sink.send(&monitor.discord_channel_id, clip).await {
                tracing::error!(
                    "Failed to deliver clip {} to channel {}: {}",
                    clip.id,
                    monitor.discord_channel_id,
                    e
                );
            }

            seen.mark_seen(&monitor.guild_id, &clip.id).await?;
        }

        match page.next_cursor {
            Some(next) if !next.is_empty() => cursor = Some(next),
            _ => break,
        }
    }

    Ok(())
}
