use std::sync::{Arc, Mutex};

use mlbox::capabilities::CapabilityError;
use mlbox::preload::PreloadGate;
use mlbox::utils::testing::{tiny_model_spec, write_tiny_model};
use mlbox::{ImageClassifier, ImageClassifierOptions, Tensor};

#[tokio::test]
async fn calls_before_readiness_run_in_issue_order() {
    let gate = PreloadGate::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let tag = |name: &'static str| {
        let log = log.clone();
        move || {
            log.lock().unwrap().push(name);
            Ok(name)
        }
    };

    let a = gate.defer(tag("A"));
    let b = gate.defer(tag("B"));
    let c = gate.defer(tag("C"));

    // nothing runs until readiness fires
    assert!(log.lock().unwrap().is_empty());
    assert!(!gate.is_ready());

    gate.mark_ready();
    assert_eq!(*log.lock().unwrap(), vec!["A", "B", "C"]);

    // D issued after readiness executes immediately, without waiting on A-C
    let d = gate.defer(tag("D"));
    assert_eq!(log.lock().unwrap().last(), Some(&"D"));

    assert_eq!(a.await.unwrap(), "A");
    assert_eq!(b.await.unwrap(), "B");
    assert_eq!(c.await.unwrap(), "C");
    assert_eq!(d.await.unwrap(), "D");
}

#[tokio::test]
async fn failing_factory_rejects_only_itself() {
    let gate = PreloadGate::new();

    let a = gate.defer(|| Ok("a"));
    let b = gate.defer::<&str, _>(|| Err(CapabilityError::InvalidModel("bad weights".into())));
    let c = gate.defer(|| Ok("c"));

    gate.mark_ready();

    assert_eq!(a.await.unwrap(), "a");
    let err = b.await.unwrap_err();
    assert!(err.to_string().contains("bad weights"));
    assert_eq!(c.await.unwrap(), "c");
}

#[tokio::test]
async fn preloaded_image_classifier_factory() {
    let path = write_tiny_model("preload-model.json").unwrap();
    let source = path.to_str().unwrap().to_string();

    let gate = PreloadGate::new();
    let handle = gate.defer(move || {
        let spec = serde_json::from_str(&std::fs::read_to_string(&source)?)?;
        ImageClassifier::from_spec(spec, ImageClassifierOptions::default())
    });

    gate.mark_ready();
    let clf = handle.await.unwrap();
    std::fs::remove_file(&path).unwrap();

    let input = Tensor::matrix(2, 2, vec![3.0, 0.0, 0.0, 0.0]).unwrap();
    assert_eq!(clf.classify(&input, Some(1)).unwrap()[0].label, "cat");
}

#[test]
fn wait_blocks_until_ready_from_another_thread() {
    let gate = PreloadGate::new();
    let handle = gate.defer(|| Ok(tiny_model_spec().labels.len()));

    let trigger = gate.clone();
    let t = std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(20));
        trigger.mark_ready();
    });

    assert_eq!(handle.wait().unwrap(), 2);
    t.join().unwrap();
}
