// Host wiring: build the listener for the native viewer or the browser page

#[cfg(not(target_arch = "wasm32"))]
pub use native::{drive_to_page, load_replay, run_viewer};
#[cfg(target_arch = "wasm32")]
pub use web::start_board;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use anyhow::{Context, Result, bail};
    use serde_json::Value;

    use crate::Cli;
    use crate::config::{BOARD, ConnectionTarget};
    use crate::data::{PushChannel, ScriptedChannel, WsPushChannel};
    use crate::engine::{ConnectionListener, DispatchOutcome, PushEvent};
    use crate::ui::page::{compose, write_page};
    use crate::ui::{MemoryContainer, SnapshotRenderer, StatusLabelUpdater};

    /// Connect (or replay) and keep the page file in step with every event
    pub async fn run_viewer(args: &Cli) -> Result<()> {
        let processed = match &args.replay {
            Some(path) => drive_to_page(load_replay(path)?, &args.out).await,
            None => {
                let target = ConnectionTarget::new(&args.scheme, &args.host, Some(args.port));
                let channel = WsPushChannel::connect(&target).await?;
                drive_to_page(channel, &args.out).await
            }
        };
        log::info!(
            "Processed {} events; last page at {}",
            processed,
            args.out.display()
        );
        Ok(())
    }

    /// Run the listener over `channel`, rewriting the page at `out` after every handled event
    pub async fn drive_to_page<P: PushChannel>(channel: P, out: &Path) -> usize {
        let mut listener = ConnectionListener::new(
            channel,
            SnapshotRenderer::new(MemoryContainer::new(BOARD.ids.data_table)),
            StatusLabelUpdater::new(MemoryContainer::new(BOARD.ids.last_update)),
        );

        while let Some(outcome) = listener.step().await {
            if outcome == DispatchOutcome::Ignored {
                continue;
            }
            let html = compose(
                listener.renderer().container().html(),
                listener.label().container().html(),
            );
            if let Err(e) = write_page(out, &html).await {
                log::error!("⚠️ {:#}", e);
            }
        }

        listener.events_seen()
    }

    /// A saved snapshot (JSON array of records) as a one-shot channel
    pub fn load_replay(path: &Path) -> Result<ScriptedChannel> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay file {}", path.display()))?;
        let value: Value = serde_json::from_str(&raw)
            .with_context(|| format!("Replay file {} is not valid JSON", path.display()))?;
        let Value::Array(records) = value else {
            bail!(
                "Replay file {} must hold a JSON array of records",
                path.display()
            );
        };

        log::info!(
            ">>> Replay: {} records from {}",
            records.len(),
            path.display()
        );
        Ok(ScriptedChannel::new(
            path.display().to_string(),
            [
                PushEvent::UpdateRecords(records),
                PushEvent::LastUpdate(format!("Replay of {}", path.display())),
            ],
        ))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use futures::executor::block_on;

        fn scratch(name: &str) -> std::path::PathBuf {
            std::env::temp_dir().join(format!("crypto-board-{}-{}", std::process::id(), name))
        }

        #[test]
        fn replay_file_becomes_snapshot_then_label() {
            let path = scratch("replay.json");
            std::fs::write(&path, r#"[{"symbol":"BTC"}]"#).unwrap();

            let mut channel = load_replay(&path).unwrap();
            std::fs::remove_file(&path).unwrap();

            assert!(matches!(
                block_on(channel.next_event()),
                Some(PushEvent::UpdateRecords(ref records)) if records.len() == 1
            ));
            assert!(matches!(
                block_on(channel.next_event()),
                Some(PushEvent::LastUpdate(ref text)) if text.starts_with("Replay of ")
            ));
            assert_eq!(block_on(channel.next_event()), None);
        }

        #[test]
        fn replay_rejects_non_array() {
            let path = scratch("object.json");
            std::fs::write(&path, r#"{"symbol":"BTC"}"#).unwrap();
            assert!(load_replay(&path).is_err());
            std::fs::remove_file(&path).unwrap();
        }

        #[test]
        fn page_is_written_after_events() {
            let out = scratch("page.html");
            let channel = ScriptedChannel::new(
                "page",
                [
                    PushEvent::UpdateRecords(Vec::new()),
                    PushEvent::LastUpdate("<5s>".to_string()),
                ],
            );

            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let processed = rt.block_on(drive_to_page(channel, &out));
            assert_eq!(processed, 2);

            let page = std::fs::read_to_string(&out).unwrap();
            assert!(page.contains("id=\"last_update\">&lt;5s&gt;</h3>"));
            std::fs::remove_file(&out).unwrap();
        }

        #[test]
        fn ignored_events_do_not_touch_the_page() {
            let out = scratch("untouched.html");
            let channel = ScriptedChannel::new(
                "ignored",
                [PushEvent::Other {
                    name: "noise".to_string(),
                }],
            );
            assert_eq!(block_on(drive_to_page(channel, &out)), 1);
            assert!(!out.exists());
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use anyhow::{Result, anyhow};

    use crate::config::{BOARD, ConnectionTarget};
    use crate::data::BrowserPushChannel;
    use crate::engine::ConnectionListener;
    use crate::ui::{DomContainer, SnapshotRenderer, StatusLabelUpdater};

    /// Bind both containers, connect back to the serving host and start listening
    pub fn start_board() -> Result<()> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("should have a document on window"))?;

        let location = window.location();
        let protocol = location
            .protocol()
            .map_err(|e| anyhow!("location.protocol failed: {:?}", e))?;
        let host = location
            .hostname()
            .map_err(|e| anyhow!("location.hostname failed: {:?}", e))?;
        let port = location
            .port()
            .map_err(|e| anyhow!("location.port failed: {:?}", e))?;
        let target =
            ConnectionTarget::from_page(ConnectionTarget::scheme_for_page(&protocol), &host, &port);

        let renderer = SnapshotRenderer::new(DomContainer::bind(&document, BOARD.ids.data_table)?);
        let label = StatusLabelUpdater::new(DomContainer::bind(&document, BOARD.ids.last_update)?);
        let channel = BrowserPushChannel::connect(&target)?;

        let mut listener = ConnectionListener::new(channel, renderer, label);
        wasm_bindgen_futures::spawn_local(async move {
            listener.run().await;
        });
        Ok(())
    }
}
