use anyhow::Context;
use slidecanvas::{
    init_logging, DeckPager, EditorState, HitTarget, OverlayId, OverlayPart, Point, PointerEvent,
    SettingsManager, SlidePager, BUILD_DATE, VERSION,
};
use slidecanvas_core::{shared, Shared};
use slidecanvas_editor::TextAlign;
use std::path::PathBuf;

const POINTER: u32 = 1;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("SlideCanvas {} ({})", VERSION, BUILD_DATE);

    let mut settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => SettingsManager::with_path(path),
        None => SettingsManager::new().context("Failed to locate settings")?,
    };
    let config = settings.load_or_default().clone();

    let deck = shared(DeckPager::new(
        config.canvas.slide_count,
        config.canvas.surface(),
    ));
    let pager: Shared<dyn SlidePager> = deck.clone();
    let mut editor = EditorState::new(pager, config.editor_config());

    if config.seed_default_content {
        let seeded = editor.seed_default_content();
        tracing::info!("Seeded {} overlays", seeded);
    }

    run_session(&mut editor)?;

    for slide in 0..editor.slide_count() {
        let view = editor.view_for_slide(slide);
        println!(
            "Slide {}/{}: {} element(s)",
            slide + 1,
            view.nav.total,
            view.element_count
        );
        for overlay in &view.boxes {
            println!(
                "  {} {:?} at ({:.0}, {:.0}) {:.0}x{:.0}{}",
                overlay.id,
                overlay.content,
                overlay.rect.left,
                overlay.rect.top,
                overlay.rect.width,
                overlay.rect.height,
                if overlay.active { " [selected]" } else { "" }
            );
        }
    }

    let deck = deck.borrow();
    tracing::info!(
        suspended = deck.suspend_calls(),
        resumed = deck.resume_calls(),
        "Pager gesture suspension balance"
    );

    Ok(())
}

/// Add a text box, move and resize it, restyle it, then page forward.
fn run_session(editor: &mut EditorState) -> anyhow::Result<()> {
    editor.set_content_input("Hello, slides");
    let id = editor.add_text().context("Failed to add text")?;

    let start = corner(editor, id).context("New overlay is not visible")?;
    let grab = Point::new(start.x + 10.0, start.y + 10.0);
    pointer_gesture(editor, id, OverlayPart::Body, grab, (40.0, 20.0));

    let moved = corner(editor, id).context("Overlay vanished after drag")?;
    let handle = Point::new(moved.x + 5.0, moved.y + 5.0);
    pointer_gesture(editor, id, OverlayPart::ResizeHandle, handle, (60.0, 10.0));

    editor.set_font_size(32.0);
    editor.set_text_align(TextAlign::Left);
    editor.save();
    editor.next_slide();
    Ok(())
}

fn pointer_gesture(
    editor: &mut EditorState,
    id: OverlayId,
    part: OverlayPart,
    from: Point,
    delta: (f64, f64),
) {
    let to = Point::new(from.x + delta.0, from.y + delta.1);
    let target = HitTarget::Overlay { id, part };
    editor.handle_pointer(PointerEvent::down(POINTER, from, target));
    editor.handle_pointer(PointerEvent::moved(POINTER, to));
    let outcome = editor.handle_pointer(PointerEvent::up(POINTER, to));
    tracing::debug!("{:?} gesture on {}: {:?}", part, id, outcome);
}

/// Top-left corner of an overlay on the active slide.
fn corner(editor: &EditorState, id: OverlayId) -> Option<Point> {
    editor
        .view()
        .boxes
        .into_iter()
        .find(|b| b.id == id)
        .map(|b| Point::new(b.rect.left, b.rect.top))
}
