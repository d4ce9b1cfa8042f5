// tests/pipeline.rs - end-to-end frame pipeline with captured events
use hand_tracker::config::{PointerMode, TrackerConfig};
use hand_tracker::debounce::EventKind;
use hand_tracker::gestures::Gesture;
use hand_tracker::landmarks::{synth_hand, Frame, Hand, HandObservation, LandmarkProvider, SimulatedProvider};
use hand_tracker::pointer::{MouseState, RecordingPointer};
use hand_tracker::session::TrackingSession;

const OPEN_HAND: [bool; 5] = [true, true, true, true, true];
const THUMBS_UP: [bool; 5] = [true, false, false, false, false];
const FIST: [bool; 5] = [false, false, false, false, false];

fn control_frame(open: [bool; 5]) -> Frame {
    // Mirrored provider label: reported Left is the session's Right.
    let obs = HandObservation::from_provider(Hand::Left, synth_hand(open)).unwrap();
    Frame { hands: vec![obs] }
}

fn run(session: &mut TrackingSession, frame: &Frame, n: usize) -> Vec<hand_tracker::GestureEvent> {
    let mut events = Vec::new();
    for _ in 0..n {
        events.extend(session.process_frame(frame).unwrap());
    }
    events
}

#[test]
fn arm_click_disarm_sequence() {
    let pointer = RecordingPointer::new();
    let config = TrackerConfig {
        pointer_mode: PointerMode::AnchorMouse,
        ..TrackerConfig::default()
    };
    let mut session = TrackingSession::new(config, Box::new(pointer.clone()));

    let events = run(&mut session, &control_frame(THUMBS_UP), 3);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].gesture, Gesture::ThumbsUp);
    assert_eq!(events[0].kind, EventKind::Start);
    let MouseState::Armed { anchor } = session.mouse_state() else {
        panic!("expected armed state");
    };
    // Anchor is the wrist position of the synthetic hand.
    assert!((anchor.x - 0.5).abs() < 1e-9);
    assert!((anchor.y - 0.8).abs() < 1e-9);

    run(&mut session, &control_frame(FIST), 3);
    assert_eq!(pointer.clicks(), 1);
    assert!(matches!(session.mouse_state(), MouseState::Armed { .. }));

    run(&mut session, &control_frame(OPEN_HAND), 3);
    assert_eq!(session.mouse_state(), MouseState::Idle);
    assert_eq!(pointer.clicks(), 1);
}

#[test]
fn flicker_is_debounced_away() {
    let pointer = RecordingPointer::new();
    let mut session = TrackingSession::new(TrackerConfig::default(), Box::new(pointer));

    run(&mut session, &control_frame(OPEN_HAND), 3);
    assert_eq!(session.accepted(Hand::Right), Some(Gesture::OpenHand));

    // Two fist frames, one open, two fist: never three in a row.
    let mut events = Vec::new();
    events.extend(run(&mut session, &control_frame(FIST), 2));
    events.extend(run(&mut session, &control_frame(OPEN_HAND), 1));
    events.extend(run(&mut session, &control_frame(FIST), 2));
    assert!(events.is_empty());
    assert_eq!(session.accepted(Hand::Right), Some(Gesture::OpenHand));

    // One more fist completes the run.
    let events = run(&mut session, &control_frame(FIST), 1);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].gesture, Gesture::Fist);
}

#[test]
fn hands_debounce_independently() {
    let pointer = RecordingPointer::new();
    let mut session = TrackingSession::new(TrackerConfig::default(), Box::new(pointer));

    let frame = Frame {
        hands: vec![
            HandObservation::from_provider(Hand::Left, synth_hand(OPEN_HAND)).unwrap(),
            HandObservation::from_provider(Hand::Right, synth_hand(FIST)).unwrap(),
        ],
    };
    let mut events = Vec::new();
    for _ in 0..3 {
        events.extend(session.process_frame(&frame).unwrap());
    }
    assert_eq!(events.len(), 2);
    assert_eq!(session.accepted(Hand::Right), Some(Gesture::OpenHand));
    assert_eq!(session.accepted(Hand::Left), Some(Gesture::Fist));
}

#[test]
fn absolute_mode_moves_toward_screen_center() {
    let pointer = RecordingPointer::new();
    let config = TrackerConfig {
        pointer_mode: PointerMode::AbsoluteMouse,
        ..TrackerConfig::default()
    };
    let mut session = TrackingSession::new(config, Box::new(pointer.clone()));

    // Arm first; the driver only runs while armed.
    run(&mut session, &control_frame(THUMBS_UP), 3);
    run(&mut session, &control_frame(THUMBS_UP), 20);

    let moves = pointer.moves_abs();
    assert!(!moves.is_empty());
    // Wrist sits at (0.5, 0.8): x maps to exact center, y below it.
    let (x, y) = *moves.last().unwrap();
    assert_eq!(x, 960);
    assert_eq!(y, (0.3 * 2.0 * 1080.0 + 540.0_f64).round() as i32);
}

#[test]
fn simulated_provider_drives_the_whole_pipeline() {
    let pointer = RecordingPointer::new();
    let config = TrackerConfig {
        pointer_mode: PointerMode::AnchorMouse,
        ..TrackerConfig::default()
    };
    let mut session = TrackingSession::new(config, Box::new(pointer.clone()));

    let mut provider = SimulatedProvider::new(120);
    let mut events = Vec::new();
    while let Some(frame) = provider.next_frame().unwrap() {
        events.extend(session.process_frame(&frame).unwrap());
    }

    // The script arms on thumbs up and clicks on the following fist.
    assert!(events.iter().any(|e| e.gesture == Gesture::ThumbsUp));
    assert!(events.iter().any(|e| e.gesture == Gesture::Fist));
    assert!(pointer.clicks() >= 1);
}
