//! End-to-end replay: input events through the board, out to a recorded frame.

use inkslate_core::{
    ClientPosition, InputEvent, MouseButton, StrokeColor, ToolKind, Whiteboard,
};
use inkslate_render::{DrawCommand, RecordingSurface, RenderContext, render};
use kurbo::{Cap, Join, Point, Rect, Size, Vec2};
use pretty_assertions::assert_eq;

const RED: StrokeColor = StrokeColor::new(255, 0, 0, 255);

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 640.0, 480.0)
}

fn frame(board: &Whiteboard) -> Vec<DrawCommand> {
    let mut surface = RecordingSurface::new(Size::new(640.0, 480.0));
    render(&RenderContext::from(board), &mut surface).unwrap();
    surface.take_commands()
}

fn press(board: &mut Whiteboard, x: f64, y: f64, button: MouseButton) {
    board.handle_event(
        &InputEvent::PointerDown {
            position: ClientPosition::Pointer(Point::new(x, y)),
            button,
        },
        bounds(),
    );
}

fn drag(board: &mut Whiteboard, x: f64, y: f64) {
    board.handle_event(
        &InputEvent::PointerMove {
            position: ClientPosition::Pointer(Point::new(x, y)),
        },
        bounds(),
    );
}

fn release(board: &mut Whiteboard) {
    board.handle_event(&InputEvent::PointerUp, bounds());
}

fn header() -> Vec<DrawCommand> {
    vec![
        DrawCommand::ClearRect(Rect::new(0.0, 0.0, 640.0, 480.0)),
        DrawCommand::SetLineCap(Cap::Round),
        DrawCommand::SetLineJoin(Join::Round),
    ]
}

/// Every point-carrying command, in order.
fn positions(commands: &[DrawCommand]) -> Vec<Point> {
    commands
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => Some(*p),
            DrawCommand::StrokeRect { origin, .. } => Some(*origin),
            DrawCommand::Arc { center, .. } => Some(*center),
            _ => None,
        })
        .collect()
}

fn sample_board() -> Whiteboard {
    let mut board = Whiteboard::new();
    board.set_color(RED);
    board.set_thickness(3.0).unwrap();

    press(&mut board, 10.0, 10.0, MouseButton::Primary);
    drag(&mut board, 20.0, 10.0);
    drag(&mut board, 20.0, 20.0);
    release(&mut board);

    for (tool, x) in [(ToolKind::Line, 100.0), (ToolKind::Rectangle, 200.0), (ToolKind::Circle, 300.0)] {
        board.set_tool(tool);
        press(&mut board, x, 100.0, MouseButton::Primary);
        drag(&mut board, x + 25.0, 140.0);
        release(&mut board);
    }
    board
}

#[test]
fn test_freehand_scenario_renders_connected_path() {
    let board = sample_board();
    let commands = frame(&board);

    let mut expected = header();
    expected.extend([
        DrawCommand::SetStrokeColor(RED),
        DrawCommand::SetLineWidth(3.0),
        DrawCommand::BeginPath,
        DrawCommand::MoveTo(Point::new(10.0, 10.0)),
        DrawCommand::LineTo(Point::new(20.0, 10.0)),
        DrawCommand::LineTo(Point::new(20.0, 20.0)),
        DrawCommand::Stroke,
    ]);
    assert_eq!(&commands[..expected.len()], expected.as_slice());
}

#[test]
fn test_rectangle_scenario_is_not_normalized() {
    let mut board = Whiteboard::new();
    board.set_tool(ToolKind::Rectangle);
    press(&mut board, 50.0, 50.0, MouseButton::Primary);
    drag(&mut board, 30.0, 20.0);
    release(&mut board);

    let commands = frame(&board);
    assert_eq!(
        commands.last(),
        Some(&DrawCommand::StrokeRect {
            origin: Point::new(50.0, 50.0),
            extent: Vec2::new(-20.0, -30.0),
        })
    );
}

#[test]
fn test_pan_scenario_moves_origin_stroke() {
    let mut board = Whiteboard::new();
    board.pan(Vec2::new(100.0, 100.0));
    board.set_tool(ToolKind::Line);
    // Stroke stored at absolute (0, 0) -> (10, 0).
    press(&mut board, 100.0, 100.0, MouseButton::Primary);
    drag(&mut board, 110.0, 100.0);
    release(&mut board);

    press(&mut board, 400.0, 400.0, MouseButton::Secondary);
    drag(&mut board, 415.0, 395.0);
    release(&mut board);

    assert_eq!(board.camera().offset, Vec2::new(115.0, 95.0));
    assert_eq!(board.document().last().unwrap().points()[0], Point::ZERO);
    assert_eq!(positions(&frame(&board))[0], Point::new(115.0, 95.0));
}

#[test]
fn test_offset_independence() {
    let mut board = sample_board();
    let before = positions(&frame(&board));
    let stored: Vec<_> = board.document().iter().map(|s| s.points()).collect();

    board.pan(Vec2::new(-37.0, 12.5));
    let after = positions(&frame(&board));

    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert_eq!(*b - *a, Vec2::new(-37.0, 12.5));
    }
    let stored_after: Vec<_> = board.document().iter().map(|s| s.points()).collect();
    assert_eq!(stored, stored_after);
}

#[test]
fn test_reset_view_matches_origin_render() {
    let origin = sample_board();
    let mut panned = sample_board();
    panned.pan(Vec2::new(300.0, -80.0));
    panned.pan(Vec2::new(-12.0, 4.0));
    panned.reset_view();

    assert_eq!(frame(&panned), frame(&origin));
}

#[test]
fn test_render_is_repeatable() {
    let board = sample_board();
    assert_eq!(frame(&board), frame(&board));
}

#[test]
fn test_clear_renders_blank() {
    let mut board = sample_board();
    board.clear();
    assert_eq!(frame(&board), header());

    board.clear();
    assert_eq!(frame(&board), header());
}

#[test]
fn test_erase_paints_on_top_in_fixed_color() {
    let mut board = Whiteboard::new();
    board.set_color(RED);
    press(&mut board, 0.0, 0.0, MouseButton::Primary);
    drag(&mut board, 50.0, 0.0);
    release(&mut board);

    board.set_tool(ToolKind::Erase);
    press(&mut board, 25.0, -5.0, MouseButton::Primary);
    board.set_color(StrokeColor::new(0, 255, 0, 255));
    drag(&mut board, 25.0, 5.0);
    release(&mut board);

    let colors: Vec<_> = frame(&board)
        .into_iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::SetStrokeColor(c) => Some(c),
            _ => None,
        })
        .collect();
    assert_eq!(colors, vec![RED, StrokeColor::black()]);
    assert_eq!(board.document().len(), 2);
}

#[test]
fn test_zero_size_shapes_still_render() {
    let mut board = Whiteboard::new();
    for tool in [ToolKind::Line, ToolKind::Rectangle, ToolKind::Circle] {
        board.set_tool(tool);
        press(&mut board, 5.0, 5.0, MouseButton::Primary);
        release(&mut board);
    }
    let mut surface = RecordingSurface::new(Size::new(640.0, 480.0));
    render(&RenderContext::from(&board), &mut surface).unwrap();
    assert_eq!(surface.outlines_drawn(), 3);
}
