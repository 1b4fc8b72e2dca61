// Quick demonstration of the edit history
// Run with: RUST_LOG=sync_edit=trace cargo run --bin demo_history

use sync_edit::{EditCommand, HistoryConfig, MultiCommand, SyncEditData};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_row(
    editor: &SyncEditData,
    track: usize,
    row: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    match editor.data().track(track)?.key_frame(row) {
        Some(key) => println!("   row {} = {:.2}", row, key.value),
        None => println!("   row {} is empty", row),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "sync_edit=debug".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => HistoryConfig::load(path)?,
        None => HistoryConfig::default(),
    };

    let mut editor = SyncEditData::with_config(&config);
    let track = editor.data_mut().create_track("camera:zoom");

    println!("Edit row 5 twice");
    editor.exec(EditCommand::set(track, 5, 2.0))?;
    print_row(&editor, track, 5)?;
    editor.exec(EditCommand::set(track, 5, 3.0))?;
    print_row(&editor, track, 5)?;

    println!("\nUndo both");
    while editor.undo()? {
        print_row(&editor, track, 5)?;
    }

    println!("\nRedo both");
    while editor.redo()? {
        print_row(&editor, track, 5)?;
    }

    println!("\nGrouped edit");
    let mut group = MultiCommand::with_description("Ramp 0..8");
    for row in (0..=8).step_by(4) {
        group.add(EditCommand::set(track, row, row as f32 / 8.0));
    }
    editor.exec(group)?;
    for row in [0, 4, 8] {
        print_row(&editor, track, row)?;
    }

    if let Some(description) = editor.history().undo_description() {
        println!("\nUndo: {}", description);
    }
    editor.undo()?;
    for row in [0, 4, 8] {
        print_row(&editor, track, row)?;
    }

    Ok(())
}
