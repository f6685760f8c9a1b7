use approx::assert_relative_eq;
use gantt_rs::api::{GanttChart, GanttChartConfig};
use gantt_rs::core::{Item, ItemId, Margins, Viewport};
use gantt_rs::error::GanttResult;
use gantt_rs::render::{Color, ItemVisual, NullRenderer, RenderFrame, Renderer, TextHAlign};

/// Keeps every frame and live update for inspection.
#[derive(Debug, Default)]
struct RecordingRenderer {
    frames: Vec<RenderFrame>,
    live_updates: Vec<ItemVisual>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GanttResult<()> {
        frame.validate()?;
        self.frames.push(frame.clone());
        Ok(())
    }

    fn update_item(&mut self, visual: &ItemVisual) -> GanttResult<()> {
        self.live_updates.push(visual.clone());
        Ok(())
    }
}

fn config(items: Vec<Item>) -> GanttChartConfig {
    GanttChartConfig::new(Viewport::new(1040, 400))
        .with_margins(Margins {
            top: 10,
            right: 0,
            bottom: 10,
            left: 40,
        })
        .with_items(items)
}

fn last_frame(chart: &GanttChart<RecordingRenderer>) -> &RenderFrame {
    chart.renderer().frames.last().expect("at least one frame")
}

#[test]
fn initial_frame_creates_every_visual_in_collection_order() {
    let chart = GanttChart::new(
        RecordingRenderer::default(),
        config(vec![
            Item::new(1, 0, 0.0, 200.0).with_label("alpha"),
            Item::new("deploy", 1, 300.0, 1000.0),
        ]),
    )
    .expect("chart init");

    let frame = last_frame(&chart);
    assert_eq!(chart.renderer().frames.len(), 1);
    assert_eq!(frame.created, vec![ItemId::Int(1), ItemId::from("deploy")]);
    assert!(frame.removed.is_empty());
    assert_eq!(frame.plot_origin, (40.0, 10.0));
    assert_eq!((frame.plot_width, frame.plot_height), (1000.0, 70.0));

    let alpha = frame.item(&ItemId::Int(1)).expect("alpha visual");
    assert_eq!(alpha.class, "success");
    assert_eq!(alpha.label.text, "alpha");
    assert_eq!(alpha.label.h_align, TextHAlign::Center);
    assert_relative_eq!(alpha.label.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(alpha.label.y, 17.5, epsilon = 1e-9);
}

#[test]
fn reconciliation_is_keyed_by_item_id() {
    let mut chart = GanttChart::new(
        RecordingRenderer::default(),
        config(vec![Item::new(1, 0, 0.0, 200.0), Item::new(2, 0, 300.0, 1000.0)]),
    )
    .expect("chart init");

    chart
        .set_items(vec![
            Item::new(2, 0, 300.0, 800.0).with_class("warning"),
            Item::new(3, 0, 100.0, 400.0),
        ])
        .expect("set items");

    let frame = last_frame(&chart);
    assert_eq!(chart.renderer().frames.len(), 2);
    assert_eq!(frame.created, vec![ItemId::Int(3)]);
    assert_eq!(frame.removed, vec![ItemId::Int(1)]);
    assert_eq!(frame.items.len(), 2);
    assert_eq!(frame.item(&ItemId::Int(2)).map(|v| v.class.as_str()), Some("warning"));
    assert_eq!(chart.scene().len(), 2);
}

#[test]
fn live_drag_pushes_only_the_dragged_visual() {
    let mut chart = GanttChart::new(
        RecordingRenderer::default(),
        config(vec![Item::new(1, 0, 0.0, 200.0), Item::new(2, 1, 300.0, 1000.0)]),
    )
    .expect("chart init");

    chart.pointer_down(140.0, 20.0).expect("down");
    chart.pointer_move(160.0, 20.0).expect("move");
    chart.pointer_move(180.0, 20.0).expect("move");

    let updates = &chart.renderer().live_updates;
    assert_eq!(updates.len(), 2);
    assert!(updates.iter().all(|visual| visual.id == ItemId::Int(1)));
    assert_relative_eq!(updates[1].rect.x, 40.0, epsilon = 1e-9);
    assert_eq!(chart.renderer().frames.len(), 1);
}

#[test]
fn grid_toggles_change_axis_tick_extent() {
    let mut chart = GanttChart::new(
        RecordingRenderer::default(),
        config(vec![Item::new(1, 0, 0.0, 1000.0), Item::new(2, 1, 0.0, 500.0)]),
    )
    .expect("chart init");

    let grid_lines = |frame: &RenderFrame| {
        frame
            .axis_lines
            .iter()
            .filter(|line| line.color == Color::GRID)
            .copied()
            .collect::<Vec<_>>()
    };

    let frame = last_frame(&chart);
    let lines = grid_lines(frame);
    let vertical = lines.iter().filter(|line| line.x1 == line.x2).count();
    assert_eq!(vertical, 21);
    assert_eq!(lines.len(), 21 + 3);
    assert!(
        lines
            .iter()
            .filter(|line| line.x1 == line.x2)
            .all(|line| line.y1 == frame.plot_height && line.y2 == 0.0)
    );
    assert_eq!(frame.axis_labels.len(), 21);

    chart.set_x_grid_enabled(false).expect("toggle");
    let frame = last_frame(&chart);
    assert_eq!(grid_lines(frame).len(), 3);
    assert!(
        frame
            .axis_lines
            .iter()
            .filter(|line| line.x1 == line.x2 && line.y1 == frame.plot_height)
            .all(|line| line.y2 == frame.plot_height - 6.0)
    );

    chart.set_y_grid_enabled(false).expect("toggle");
    assert!(grid_lines(last_frame(&chart)).is_empty());
}

#[test]
fn lane_labels_sit_left_of_the_plot_centred_on_their_lane() {
    let mut chart = GanttChart::new(
        RecordingRenderer::default(),
        config(vec![Item::new(1, 0, 0.0, 200.0), Item::new(2, 1, 300.0, 1000.0)])
            .with_lanes(["Build", "Deploy"]),
    )
    .expect("chart init");

    let labels = &last_frame(&chart).lane_labels;
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[1].text, "Deploy");
    assert_eq!(labels[1].x, -40.0);
    assert_relative_eq!(labels[1].y, 52.5, epsilon = 1e-9);
    assert_eq!(labels[1].h_align, TextHAlign::Left);

    chart.set_lane_labels_enabled(false).expect("toggle");
    assert!(last_frame(&chart).lane_labels.is_empty());
}

#[test]
fn reversed_items_keep_negative_width() {
    let chart = GanttChart::new(
        NullRenderer::default(),
        config(vec![Item::new(1, 0, 0.0, 1000.0), Item::new(2, 0, 600.0, 400.0)]),
    )
    .expect("chart init");

    let reversed = chart.item_visual(&ItemId::Int(2)).expect("visual");
    assert_relative_eq!(reversed.rect.x, 600.0, epsilon = 1e-9);
    assert_relative_eq!(reversed.rect.width, -200.0, epsilon = 1e-9);
    assert_eq!(chart.renderer().frames_rendered, 1);
}

#[test]
fn sublane_override_removes_vertical_offsets() {
    let mut chart = GanttChart::new(
        NullRenderer::default(),
        config(vec![Item::new(1, 0, 0.0, 200.0), Item::new(2, 0, 300.0, 1000.0)]),
    )
    .expect("chart init");
    assert_eq!(chart.sublanes(), 2);
    assert_relative_eq!(
        chart.item_visual(&ItemId::Int(2)).expect("visual").rect.y,
        35.0,
        epsilon = 1e-9
    );

    chart.set_sublanes(1).expect("override");
    assert_eq!(
        chart.item_visual(&ItemId::Int(2)).expect("visual").rect.y,
        0.0
    );

    chart.add_item(Item::new(3, 0, 0.0, 50.0)).expect("add");
    assert_eq!(chart.sublanes(), 3);
}

#[test]
fn renderer_errors_propagate() {
    #[derive(Default)]
    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&mut self, _frame: &RenderFrame) -> GanttResult<()> {
            Err(gantt_rs::GanttError::Render("surface lost".to_owned()))
        }
    }

    let result = GanttChart::new(FailingRenderer, config(vec![Item::new(1, 0, 0.0, 1.0)]));
    let err = result.err().expect("render failure");
    assert!(format!("{err}").contains("surface lost"));
}
