use approx::assert_relative_eq;
use boxoffice_charts::core::{Metric, Movie};
use boxoffice_charts::{ChartConfig, ChartError, ChartSession};

fn movies() -> Vec<Movie> {
    vec![
        Movie::new("Alpha", "Action", 2004, 300.0, 100.0),
        Movie::new("Beta", "Drama", 2005, 50.0, 400.0),
        Movie::new("Gamma", "Comedy", 2006, 200.0, 250.0),
    ]
}

fn session() -> ChartSession {
    // 600x500 frame, margins 40/40/40/200 -> 360x420 plot area.
    let config = ChartConfig::ranked_bar().with_top_n(2);
    ChartSession::new(movies(), config).expect("session")
}

#[test]
fn session_starts_without_frame_on_revenue() {
    let session = session();
    assert!(session.frame().is_none());
    assert_eq!(session.metric(), Metric::Revenue);
}

#[test]
fn render_ranks_top_movies_by_revenue() {
    let mut session = session();
    let frame = session.render().expect("render");

    let keys: Vec<&str> = frame.bars.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["Beta", "Gamma"]);
    assert_eq!(frame.x_scale.domain(), (0.0, 400.0));
    assert_relative_eq!(frame.bars[0].width, 360.0, epsilon = 1e-9);
    assert_relative_eq!(frame.bars[1].width, 225.0, epsilon = 1e-9);
}

#[test]
fn switching_metric_rebuilds_ranking_and_widths() {
    let mut session = session();
    session.render().expect("render");

    let frame = session.switch_metric(Metric::Budget).expect("switch");
    let keys: Vec<&str> = frame.bars.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["Alpha", "Gamma"]);
    assert_eq!(frame.metric, Metric::Budget);
    assert_relative_eq!(frame.bars[0].width, 360.0, epsilon = 1e-9);
    assert_relative_eq!(frame.bars[1].width, 240.0, epsilon = 1e-9);

    assert_eq!(session.metric(), Metric::Budget);
}

#[test]
fn failed_reload_keeps_previous_records_and_frame() {
    let mut session = session();
    let before = session.render().expect("render").clone();

    let mut broken = movies();
    broken[1].revenue = f64::NAN;
    let result = session.replace_movies(broken);

    assert!(matches!(
        result,
        Err(ChartError::InvalidMeasure { index: 1, .. })
    ));
    assert_eq!(session.frame(), Some(&before));
    assert_eq!(session.movies()[1].revenue, 400.0);
}

#[test]
fn reload_with_no_records_is_rejected() {
    let mut session = session();
    session.render().expect("render");

    let result = session.replace_movies(Vec::new());
    assert!(matches!(result, Err(ChartError::EmptyInput(_))));
    assert_eq!(session.movies().len(), 3);
}

#[test]
fn successful_reload_replaces_frame() {
    let mut session = session();
    session.render().expect("render");

    let frame = session
        .replace_movies(vec![Movie::new("Delta", "Drama", 2007, 10.0, 90.0)])
        .expect("reload");
    assert_eq!(frame.bars.len(), 1);
    assert_eq!(frame.bars[0].key, "Delta");
    assert_eq!(session.movies().len(), 1);
}

#[test]
fn failed_metric_switch_keeps_active_metric() {
    let mut records = movies();
    records[0].budget = f64::INFINITY;
    let mut session =
        ChartSession::new(records, ChartConfig::ranked_bar().with_top_n(2)).expect("session");
    session.render().expect("revenue render");

    assert!(session.switch_metric(Metric::Budget).is_err());
    assert_eq!(session.metric(), Metric::Revenue);
    assert_eq!(
        session.frame().map(|f| f.metric),
        Some(Metric::Revenue)
    );
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let result = ChartSession::new(movies(), ChartConfig::ranked_bar().with_top_n(0));
    assert!(matches!(result, Err(ChartError::Config(_))));
}
