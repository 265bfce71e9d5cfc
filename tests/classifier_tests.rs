use tapline::pipeline::classifier::{Category, EventClassifier, EventShape, ProcessingDecision, Scope};
use tapline::pipeline::event::InteractionKind;
use tapline::pipeline::signal::{RawSignal, SignalKind};

fn classify(kind: SignalKind) -> ProcessingDecision {
    EventClassifier::new().classify(&RawSignal::new(kind, "com.app", 0))
}

#[test]
fn test_every_processed_kind_maps_to_one_shape() {
    let cases = [
        (SignalKind::WindowStateChanged, Scope::Global, EventShape::ScreenVisit),
        (SignalKind::ViewClicked, Scope::Global, EventShape::Interaction(InteractionKind::Clicked)),
        (SignalKind::ViewContextClicked, Scope::Global, EventShape::Interaction(InteractionKind::ContextClicked)),
        (SignalKind::ViewLongClicked, Scope::Global, EventShape::Interaction(InteractionKind::LongClicked)),
        (SignalKind::ViewSelected, Scope::Global, EventShape::Interaction(InteractionKind::Selected)),
        (SignalKind::ViewScrolled, Scope::Debounced, EventShape::Interaction(InteractionKind::Scrolled)),
    ];

    for (kind, scope, shape) in cases {
        assert_eq!(
            classify(kind),
            ProcessingDecision::Process(Category { scope, shape }),
            "{:?} misclassified",
            kind
        );
    }
}

#[test]
fn test_other_kinds_ignored() {
    for code in [8, 16, 2048, 65536] {
        assert_eq!(classify(SignalKind::Other(code)), ProcessingDecision::Ignored);
    }
}

#[test]
fn test_missing_origin_is_malformed() {
    let classifier = EventClassifier::new();

    let mut signal = RawSignal::new(SignalKind::ViewClicked, "", 0);
    assert_eq!(classifier.classify(&signal), ProcessingDecision::DroppedMalformed);

    signal.origin = None;
    assert_eq!(classifier.classify(&signal), ProcessingDecision::DroppedMalformed);

    // Malformed wins over ignored.
    signal.kind = SignalKind::Other(8);
    assert_eq!(classifier.classify(&signal), ProcessingDecision::DroppedMalformed);
}
