use gantt_rs::api::{GanttChart, GanttChartConfig};
use gantt_rs::core::{Item, ItemId, MAX_LANES, Margins, Viewport};
use gantt_rs::render::NullRenderer;

fn empty_chart() -> GanttChart<NullRenderer> {
    let config = GanttChartConfig::new(Viewport::new(640, 480)).with_margins(Margins {
        top: 20,
        right: 15,
        bottom: 20,
        left: 20,
    });
    GanttChart::new(NullRenderer::default(), config).expect("chart init")
}

#[test]
fn empty_chart_has_degenerate_domain_and_no_lanes() {
    let chart = empty_chart();
    assert!(chart.items().is_empty());
    assert_eq!(chart.lane_count(), 0);
    assert_eq!(chart.time_domain(), (0.0, 0.0));
    assert_eq!(chart.size(), (640, 480));
    assert_eq!(chart.renderer().frames_rendered, 1);
}

#[test]
fn set_items_derives_lanes_sublanes_and_height() {
    let mut chart = empty_chart();
    chart
        .set_items(vec![
            Item::new(1, 0, 10.0, 20.0),
            Item::new(2, 2, 15.0, 40.0),
            Item::new(3, 2, 50.0, 60.0),
            Item::new(4, 2, 5.0, 8.0),
        ])
        .expect("set items");

    assert_eq!(chart.lane_count(), 3);
    assert_eq!(chart.lanes(), ["", "", ""]);
    assert_eq!(chart.sublanes(), 3);
    assert_eq!(chart.time_domain(), (5.0, 60.0));
    assert_eq!(chart.size(), (640, 3 * 35 * 3 + 40));

    let sublanes: Vec<usize> = chart.items().iter().map(Item::sublane).collect();
    assert_eq!(sublanes, vec![0, 0, 1, 2]);
    assert_eq!(chart.sublane_packing().lane_depths, vec![1, 0, 3]);
    assert_eq!(chart.sublane_packing().deepest_lanes.as_slice(), &[2]);
}

#[test]
fn set_items_packs_and_renders_exactly_once() {
    let mut chart = empty_chart();
    let before = chart.cycle_stats();
    chart
        .set_items(vec![Item::new(1, 0, 0.0, 10.0)])
        .expect("set items");
    let after = chart.cycle_stats();

    assert_eq!(after.pack_passes, before.pack_passes + 1);
    assert_eq!(after.render_passes, before.render_passes + 1);
    assert_eq!(chart.renderer().frames_rendered, 2);
}

#[test]
fn add_items_appends_in_order() {
    let mut chart = empty_chart();
    chart
        .set_items(vec![Item::new(1, 0, 0.0, 10.0)])
        .expect("set items");
    chart
        .add_item(Item::new(2, 1, 20.0, 30.0))
        .expect("add item");
    chart
        .add_items(vec![Item::new(3, 1, 40.0, 50.0), Item::new(4, 0, 60.0, 70.0)])
        .expect("add items");

    let ids: Vec<ItemId> = chart.items().iter().map(|item| item.id.clone()).collect();
    assert_eq!(
        ids,
        vec![ItemId::Int(1), ItemId::Int(2), ItemId::Int(3), ItemId::Int(4)]
    );
    assert_eq!(chart.time_domain(), (0.0, 70.0));
    assert_eq!(chart.items_by_lane(1).len(), 2);
    assert_eq!(chart.items_by_lane(0)[1].id, ItemId::Int(4));
    assert!(chart.items_by_lane(5).is_empty());
}

#[test]
fn lane_labels_follow_the_item_derived_lane_count() {
    let mut chart = empty_chart();
    chart
        .set_lanes(["Plan", "Build", "Ship"])
        .expect("set lanes");
    assert_eq!(chart.lane_count(), 3);

    chart
        .set_items(vec![Item::new(1, 1, 0.0, 10.0)])
        .expect("set items");
    assert_eq!(chart.lanes(), ["Plan", "Build"]);

    chart.set_lanes(["Only"]).expect("set lanes");
    assert_eq!(chart.lanes(), ["Only", ""]);

    chart.set_items(Vec::new()).expect("clear items");
    assert_eq!(chart.lane_count(), 0);
    assert_eq!(chart.time_domain(), (0.0, 0.0));
}

#[test]
fn sparse_lane_indices_still_allocate_every_lane() {
    let mut chart = empty_chart();
    chart
        .set_items(vec![Item::new(1, 4, 0.0, 10.0)])
        .expect("set items");

    assert_eq!(chart.lane_count(), 5);
    let visual = chart.item_visual(&ItemId::Int(1)).expect("visual");
    assert_eq!(visual.rect.y, chart.map_lane_to_pixel(4.0));
    assert_eq!(chart.size(), (640, 35 * 5 + 40));
}

#[test]
fn non_finite_items_are_rejected_atomically() {
    let mut chart = empty_chart();
    chart
        .set_items(vec![Item::new(1, 0, 0.0, 10.0)])
        .expect("set items");
    let frames = chart.renderer().frames_rendered;

    let err = chart
        .add_items(vec![Item::new(2, 0, 0.0, 5.0), Item::new(3, 0, f64::INFINITY, 5.0)])
        .expect_err("infinite start");
    assert!(format!("{err}").contains("item `3`"));
    assert_eq!(chart.items().len(), 1);
    assert_eq!(chart.renderer().frames_rendered, frames);
}

#[test]
fn chrono_datetimes_convert_to_item_times() {
    use chrono::{TimeZone, Utc};

    let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).single().expect("date");
    let end = Utc.with_ymd_and_hms(2024, 5, 1, 17, 30, 0).single().expect("date");
    let mut chart = empty_chart();
    chart
        .set_items(vec![Item::from_datetimes(1, 0, start, end)])
        .expect("set items");

    let item = &chart.items()[0];
    assert_eq!(item.start_datetime(), Some(start));
    assert_eq!(item.end_datetime(), Some(end));
    assert_eq!(item.end - item.start, 9.5 * 3_600_000.0);
}

#[test]
fn lanes_beyond_the_lane_limit_are_rejected_without_mutation() {
    let config = GanttChartConfig::default().with_items(vec![Item::new(1, usize::MAX, 0.0, 10.0)]);
    let err = GanttChart::new(NullRenderer::default(), config)
        .err()
        .expect("huge lane rejected at init");
    assert!(format!("{err}").contains("lane must be <"));

    let mut chart = empty_chart();
    chart
        .set_items(vec![Item::new(1, 0, 0.0, 10.0)])
        .expect("valid items");
    let frames = chart.renderer().frames_rendered;

    assert!(chart.set_items(vec![Item::new(2, usize::MAX, 0.0, 10.0)]).is_err());
    assert!(chart.add_item(Item::new(3, MAX_LANES, 0.0, 10.0)).is_err());
    assert_eq!(chart.items().len(), 1);
    assert_eq!(chart.lane_count(), 1);
    assert_eq!(chart.renderer().frames_rendered, frames);

    chart
        .add_item(Item::new(4, MAX_LANES - 1, 0.0, 10.0))
        .expect("last allowed lane");
    assert_eq!(chart.lane_count(), MAX_LANES);
}

#[test]
fn two_items_sharing_a_lane_stack_into_two_sublanes() {
    let mut chart = empty_chart();
    chart
        .set_items(vec![Item::new(1, 0, 0.0, 10.0), Item::new(2, 0, 5.0, 15.0)])
        .expect("set items");

    let sublanes: Vec<_> = chart.items().iter().map(Item::sublane).collect();
    assert_eq!(sublanes, vec![0, 1]);
    assert_eq!(chart.sublane_packing().max_depth, 2);
    assert_eq!(chart.sublanes(), 2);
    assert_eq!(chart.lane_count(), 1);
    assert_eq!(chart.size(), (640, 2 * 35 + 40));
}
