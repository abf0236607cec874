//! End-to-end session flows driven through the public API

use geopath::render::{RecordingRenderer, RenderCommand};
use geopath::session::MessageKind;
use geopath::{CoordFormat, GeopathError, MapConfig, MapSession};

fn session_with(config_json: &str) -> MapSession<RecordingRenderer> {
    let config = MapConfig::from_json(config_json).unwrap();
    MapSession::new(config, RecordingRenderer::new()).unwrap()
}

#[test]
fn accumulates_layers_with_distinct_colors() {
    let mut session = session_with(r#"{"palette": ["red", "blue"]}"#);

    let first = session.plot("[[40.88, -122.54], [40.87, -122.53]]").unwrap();
    let second = session.plot("[[-122.54, 40.88], [-122.53, 40.87]]").unwrap();
    let third = session.plot("[[51.5, -0.12]]").unwrap();

    assert_eq!(first.layer.format, CoordFormat::LatLon);
    assert_eq!(second.layer.format, CoordFormat::LonLat);
    // Both inputs describe the same two points once resolved.
    assert_eq!(first.layer.points, second.layer.points);

    assert_eq!(first.layer.color, "#ff0000");
    assert_eq!(second.layer.color, "#0000ff");
    assert_eq!(third.layer.color, "#ff0000");

    let stats = session.statistics();
    assert_eq!(stats.layer_count, 3);
    assert_eq!(stats.total_points, 5);
    assert_eq!(
        session.renderer().visible_paths(),
        vec![first.layer.id, second.layer.id, third.layer.id]
    );
}

#[test]
fn failed_actions_keep_existing_layers() {
    let mut session = session_with("{}");
    session.plot("[[10, 20], [11, 21]]").unwrap();
    let before = session.statistics();

    for input in ["", "[", "[[1, 2], [3]]", "{\"x\": 1}", "[[200, 50]]"] {
        assert!(session.plot(input).is_err(), "input {:?} should fail", input);
        assert_eq!(session.message().unwrap().kind, MessageKind::Error);
        assert_eq!(session.statistics(), before);
    }

    assert_eq!(session.remove_layer(99), Err(GeopathError::NotFound(99)));
    assert_eq!(session.statistics(), before);
}

#[test]
fn remove_then_clear_resets_numbering() {
    let mut session = session_with(r#"{"single_point_zoom": 17}"#);
    let text = session.load_example().unwrap();
    let example = session.plot(&text).unwrap().layer;
    assert_eq!(example.point_count(), 10);

    let single = session.plot("[[0.5, 0.25]]").unwrap().layer;
    assert_eq!(
        session.renderer().last_command(),
        Some(&RenderCommand::SetView {
            center: single.points[0],
            zoom: 17
        })
    );

    session.remove_layer(example.id).unwrap();
    assert_eq!(session.statistics().total_points, 1);

    session.clear().unwrap();
    assert_eq!(session.statistics().layer_count, 0);
    let fresh = session.plot(&text).unwrap().layer;
    assert_eq!(fresh.id, example.id);
    assert_eq!(fresh.color, example.color);
}
