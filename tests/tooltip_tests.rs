use std::cell::Cell;
use std::rc::Rc;

use gantt_rs::api::{GanttChart, GanttChartConfig};
use gantt_rs::core::{Item, ItemId, Margins, Viewport};
use gantt_rs::interaction::CursorStyle;
use gantt_rs::render::NullRenderer;

fn chart_with(items: Vec<Item>) -> GanttChart<NullRenderer> {
    let config = GanttChartConfig::new(Viewport::new(1040, 400))
        .with_margins(Margins {
            top: 10,
            right: 0,
            bottom: 10,
            left: 40,
        })
        .with_items(items);
    GanttChart::new(NullRenderer::default(), config).expect("chart init")
}

fn fixture() -> GanttChart<NullRenderer> {
    chart_with(vec![
        Item::new(1, 0, 0.0, 200.0).with_tooltip("Alpha build"),
        Item::new(2, 1, 300.0, 1000.0),
    ])
}

#[test]
fn hover_shows_tooltip_at_pointer_and_leaving_hides_it() {
    let mut chart = fixture();
    chart.pointer_move(140.0, 20.0).expect("hover item");

    let tooltip = chart.tooltip();
    assert!(tooltip.visible);
    assert_eq!(tooltip.text, "Alpha build");
    assert_eq!((tooltip.x, tooltip.y), (140.0, 20.0));
    assert_eq!(chart.hovered_item(), Some(&ItemId::Int(1)));
    assert!(chart.renderer().tooltip_visible);

    chart.pointer_move(140.0, 200.0).expect("hover background");
    assert!(!chart.tooltip().visible);
    assert!(!chart.renderer().tooltip_visible);
    assert!(chart.hovered_item().is_none());
}

#[test]
fn dynamic_tooltip_is_evaluated_only_when_shown() {
    let calls = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&calls);
    let mut chart = chart_with(vec![Item::new(1, 0, 0.0, 200.0).with_tooltip_fn(move || {
        counter.set(counter.get() + 1);
        format!("call {}", counter.get())
    })]);
    assert_eq!(calls.get(), 0);

    chart.pointer_move(140.0, 20.0).expect("hover");
    assert_eq!(calls.get(), 1);
    assert_eq!(chart.tooltip().text, "call 1");

    chart.pointer_move(150.0, 20.0).expect("hover same item");
    assert_eq!(calls.get(), 1);
}

#[test]
fn redraw_and_background_press_hide_the_tooltip() {
    let mut chart = fixture();
    chart.pointer_move(140.0, 20.0).expect("hover");
    chart.redraw().expect("redraw");
    assert!(!chart.tooltip().visible);
    assert!(!chart.renderer().tooltip_visible);

    chart.pointer_leave().expect("leave");
    chart.pointer_move(140.0, 20.0).expect("hover again");
    assert!(chart.tooltip().visible);
    chart.pointer_down(600.0, 200.0).expect("press background");
    assert!(!chart.tooltip().visible);
}

#[test]
fn disabled_tooltips_never_show() {
    let mut chart = fixture();
    chart.set_tooltip_enabled(false).expect("toggle");
    chart.pointer_move(140.0, 20.0).expect("hover");
    assert!(!chart.tooltip().visible);
}

#[test]
fn items_without_tooltip_show_nothing() {
    let mut chart = fixture();
    chart.pointer_move(700.0, 60.0).expect("hover item 2");
    assert_eq!(chart.hovered_item(), Some(&ItemId::Int(2)));
    assert!(!chart.tooltip().visible);
}

#[test]
fn hover_cursor_follows_edge_classification() {
    let mut chart = fixture();

    chart.pointer_move(140.0, 20.0).expect("middle");
    assert_eq!(chart.cursor_style(), CursorStyle::Move);

    chart.pointer_move(235.0, 20.0).expect("right edge");
    assert_eq!(chart.cursor_style(), CursorStyle::Resize);
    assert_eq!(chart.renderer().last_cursor, Some(CursorStyle::Resize));

    chart.set_item_resize_enabled(false).expect("toggle");
    chart.pointer_move(236.0, 20.0).expect("right edge");
    assert_eq!(chart.cursor_style(), CursorStyle::Move);

    chart.pointer_leave().expect("leave");
    assert_eq!(chart.cursor_style(), CursorStyle::Default);
}
