//! Integration tests for events

#[cfg(test)]
mod tests {
    use elasi_errors::BuildError;
    use elasi_events::*;

    #[tokio::test]
    async fn test_event_sender_emitter() {
        let (tx, mut rx) = channel();

        tx.emit_warning("test warning");
        tx.emit_debug("test debug");
        tx.emit_step_started(BuildStep::RunConverter);

        let event1 = rx.recv().await.unwrap();
        assert!(matches!(
            event1,
            AppEvent::General(GeneralEvent::Warning { .. })
        ));

        let event2 = rx.recv().await.unwrap();
        assert!(matches!(
            event2,
            AppEvent::General(GeneralEvent::DebugLog { .. })
        ));

        let event3 = rx.recv().await.unwrap();
        assert!(matches!(
            event3,
            AppEvent::Build(BuildEvent::StepStarted {
                step: BuildStep::RunConverter
            })
        ));
    }

    #[tokio::test]
    async fn test_dropped_receiver() {
        let (tx, rx) = channel();
        drop(rx);

        // Should not panic when receiver is dropped
        tx.emit_warning("ignored");
    }

    #[test]
    fn test_log_levels() {
        let overwritten = AppEvent::Build(BuildEvent::ImportOverwritten {
            specifier: "elasi".into(),
            previous: "/elasi/a.js".into(),
            current: "/elasi/b.js".into(),
        });
        assert_eq!(overwritten.log_level(), tracing::Level::WARN);

        let failure = FailureContext::from_error(&BuildError::Timeout { seconds: 5 });
        let failed = AppEvent::Build(BuildEvent::Failed {
            step: Some(BuildStep::RunConverter),
            failure,
        });
        assert_eq!(failed.log_level(), tracing::Level::ERROR);
        assert_eq!(failed.log_target(), "elasi::events::build");
    }

    #[test]
    fn test_failure_context_from_error() {
        let failure = FailureContext::from_error(&BuildError::ConverterFailed {
            program: "mz".into(),
            code: Some(2),
            stderr: String::new(),
        });
        assert_eq!(failure.code.as_deref(), Some("build.converter_failed"));
        assert!(failure.hint.is_some());
        assert!(!failure.retryable);
    }

    #[test]
    fn test_event_serialization() {
        let event = AppEvent::Build(BuildEvent::StepCompleted {
            step: BuildStep::WriteManifest,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["domain"], "build");
        assert_eq!(json["event"]["type"], "StepCompleted");
        assert_eq!(json["event"]["step"], "write_manifest");
    }
}
