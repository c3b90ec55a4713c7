//! Integration tests for the batch pipeline

#[cfg(test)]
mod tests {
    use crate::{
        BatchDriver, Classifier, ClassifierConfig, ClassifierError, DirectorySource,
        InMemorySource, JsonReportWriter,
    };
    use proptest::prelude::*;
    use rolecheck_domain::{
        BakerStatus, ClassificationResult, Completion, ReportSink, UsageStats, MAX_EVIDENCE,
    };
    use rolecheck_llm::MockProvider;
    use std::fs;
    use tempfile::TempDir;

    const ALICE: &str = r#"{
        "name": "Alice",
        "stated_occupation": "baker",
        "baker_status": "SUPPORTED",
        "evidence": ["Alice is a baker at the downtown bakery", "she bakes bread daily"],
        "reason": "Title and duties both involve baking."
    }"#;

    const BOB: &str = r#"{
        "name": "Bob",
        "stated_occupation": "baker",
        "baker_status": "CONFLICT",
        "evidence": ["Bob works as a baker", "spends all day doing paperwork"],
        "reason": "Baker title but only clerical duties."
    }"#;

    /// Collects what the driver writes
    #[derive(Default)]
    struct MemorySink {
        written: Option<Vec<ClassificationResult>>,
    }

    impl ReportSink for MemorySink {
        type Error = ClassifierError;

        fn write_report(&mut self, results: &[ClassificationResult]) -> Result<(), ClassifierError> {
            self.written = Some(results.to_vec());
            Ok(())
        }
    }

    fn driver(provider: MockProvider) -> BatchDriver<MockProvider> {
        let config = ClassifierConfig::default().with_retry_delay_ms(0);
        BatchDriver::new(Classifier::new(provider, config))
    }

    fn write_people(dir: &TempDir) {
        fs::write(
            dir.path().join("bob.txt"),
            "Bob works as a baker but spends all day doing paperwork.",
        )
        .unwrap();
        fs::write(
            dir.path().join("alice.txt"),
            "Alice is a baker at the downtown bakery, she bakes bread daily.",
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_full_batch_flow() {
        let dir = TempDir::new().unwrap();
        write_people(&dir);
        let out = dir.path().join("results.json");

        let provider = MockProvider::new("unused")
            .then_complete(Completion::new(ALICE).with_usage(UsageStats::new(100, 40, 140)))
            .then_complete(Completion::new(BOB).with_usage(UsageStats::new(90, 35, 125)));
        let driver = driver(provider.clone());

        let mut progress = Vec::new();
        let report = driver
            .run(
                &DirectorySource::new(dir.path()),
                &mut JsonReportWriter::new(&out),
                |result| progress.push(result.source_id.clone()),
            )
            .await
            .unwrap();

        assert_eq!(progress, vec!["alice.txt", "bob.txt"]);
        assert_eq!(report.results[0].status, BakerStatus::Supported);
        assert_eq!(report.results[1].status, BakerStatus::Conflict);
        assert!(report.results[0].evidence.iter().any(|e| e.contains("bakes")));
        assert_eq!(report.usage.prompt, 190);
        assert_eq!(report.usage.completion, 75);
        assert_eq!(report.usage.total, 265);

        // Alice is sent first because of identifier ordering
        assert!(provider.calls()[0].user_prompt.contains("Alice"));

        let records = JsonReportWriter::read(&out).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].file, "alice.txt");
        assert_eq!(records[0].baker_status, "SUPPORTED");
        assert_eq!(records[1].file, "bob.txt");
        assert_eq!(records[1].baker_status, "CONFLICT");
    }

    #[tokio::test]
    async fn test_unreachable_service_does_not_stop_batch() {
        let provider = MockProvider::new(BOB)
            .then_fail("connection refused")
            .then_fail("connection refused");
        let driver = driver(provider.clone());

        let source = InMemorySource::default()
            .with_document("a.txt", "first")
            .with_document("b.txt", "second");
        let mut sink = MemorySink::default();

        let report = driver.run(&source, &mut sink, |_| {}).await.unwrap();

        assert_eq!(report.len(), 2);
        let first = &report.results[0];
        assert_eq!(first.status, BakerStatus::Error);
        assert!(first.evidence.is_empty());
        assert!(first.reason.contains("connection refused"));
        assert_eq!(report.results[1].status, BakerStatus::Conflict);
        assert_eq!(report.usage.calls, 0);
        assert_eq!(provider.call_count(), 3);
        assert_eq!(sink.written.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_every_document_failing_still_writes_report() {
        let dir = TempDir::new().unwrap();
        write_people(&dir);
        let out = dir.path().join("results.json");

        let driver = driver(MockProvider::new("{ not json"));
        let report = driver
            .run(
                &DirectorySource::new(dir.path()),
                &mut JsonReportWriter::new(&out),
                |_| {},
            )
            .await
            .unwrap();

        assert!(report.results.iter().all(|r| r.is_error()));
        let records = JsonReportWriter::read(&out).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.baker_status == "ERROR"));
    }

    #[tokio::test]
    async fn test_order_follows_sorted_identifiers() {
        let ids = ["delta.txt", "alpha.txt", "charlie.txt", "bravo.txt"];
        let source = ids
            .iter()
            .fold(InMemorySource::default(), |s, id| s.with_document(*id, "text"));

        let driver = driver(MockProvider::new(BOB));
        let mut sink = MemorySink::default();
        let report = driver.run(&source, &mut sink, |_| {}).await.unwrap();

        let got: Vec<&str> = report.results.iter().map(|r| r.source_id.as_str()).collect();
        assert_eq!(got, vec!["alpha.txt", "bravo.txt", "charlie.txt", "delta.txt"]);
    }

    #[tokio::test]
    async fn test_missing_input_is_fatal_and_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("results.json");
        let provider = MockProvider::new(ALICE);
        let driver = driver(provider.clone());

        let result = driver
            .run(
                &DirectorySource::new(dir.path().join("missing")),
                &mut JsonReportWriter::new(&out),
                |_| {},
            )
            .await;

        assert!(matches!(result, Err(ClassifierError::MissingInput(_))));
        assert!(!out.exists());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_input_is_fatal() {
        let dir = TempDir::new().unwrap();
        let driver = driver(MockProvider::new(ALICE));
        let mut sink = MemorySink::default();

        let result = driver
            .run(&DirectorySource::new(dir.path()), &mut sink, |_| {})
            .await;

        assert!(matches!(result, Err(ClassifierError::NoDocuments(_))));
        assert!(sink.written.is_none());
    }

    fn arbitrary_response() -> impl Strategy<Value = String> {
        prop_oneof![
            ".*",
            Just(String::new()),
            Just("{}".to_string()),
            Just(r#"{"name": "x"}"#.to_string()),
            Just(ALICE.to_string()),
            Just(BOB.to_string()),
            Just(ALICE.replace("SUPPORTED", "ERROR")),
            Just(ALICE.replace("\"reason\"", "\"why\"")),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_every_result_is_schema_complete(
            first in arbitrary_response(),
            second in arbitrary_response(),
            fail_first in any::<bool>(),
        ) {
            let provider = if fail_first {
                MockProvider::new(second).then_fail("boom")
            } else {
                MockProvider::new(second).then_reply(first)
            };
            let driver = driver(provider);
            let source = InMemorySource::default().with_document("doc.txt", "text");
            let mut sink = MemorySink::default();

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();
            let report = runtime
                .block_on(driver.run(&source, &mut sink, |_| {}))
                .unwrap();

            prop_assert_eq!(report.len(), 1);
            let result = &report.results[0];
            prop_assert_eq!(result.source_id.as_str(), "doc.txt");
            prop_assert!(result.evidence.len() <= MAX_EVIDENCE);
            if result.is_error() {
                prop_assert!(result.name.is_empty());
                prop_assert!(result.stated_occupation.is_empty());
                prop_assert!(result.evidence.is_empty());
                prop_assert!(!result.reason.is_empty());
            } else {
                prop_assert!(result.status.is_model_selectable());
            }
        }
    }
}
