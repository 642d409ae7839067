//! Demo driver for the castdoc_core subsystems.
//!
//! # Responsibility
//! - Run the two fixed demo scenarios over the core crate.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Takes no flags or environment inputs and exits 0 unconditionally; a
//! failed file save is reported and the run continues.

use castdoc_core::{
    default_log_level, init_logging, render_document, Channel, ConsoleSubscriber,
    DocumentEditor, FileStorage, Subscribe,
};
use log::warn;
use std::sync::Arc;

const SAVE_TARGET: &str = "document.txt";

fn main() {
    let log_dir = std::env::temp_dir().join("castdoc-logs");
    if let Err(message) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {message}");
    }

    println!("castdoc_core version={}", castdoc_core::core_version());

    run_channel_demo();
    println!();
    run_editor_demo();
}

/// Observer scenario: three subscribers, two uploads, one unsubscribe in
/// between.
fn run_channel_demo() {
    let mut channel = Channel::new("castdoc releases");

    let alice: Arc<dyn Subscribe> = Arc::new(ConsoleSubscriber::new("alice"));
    let bob: Arc<dyn Subscribe> = Arc::new(ConsoleSubscriber::new("bob"));
    let dana: Arc<dyn Subscribe> = Arc::new(ConsoleSubscriber::new("dana"));

    channel.subscribe(&alice);
    channel.subscribe(&bob);
    channel.subscribe(&dana);

    println!("Channel: {} uploads a new video: v0.1.0 walkthrough", channel.name());
    channel.upload_video("v0.1.0 walkthrough");

    channel.unsubscribe(bob.id());

    println!(
        "Channel: {} uploads a new video: storage strategies deep dive",
        channel.name()
    );
    channel.upload_video("storage strategies deep dive");
}

/// Editor scenario: build a document through the facade, render it, save
/// it to a file.
fn run_editor_demo() {
    let mut editor = DocumentEditor::new(FileStorage::new(SAVE_TARGET));

    editor.add_text("Hello, world!");
    editor.add_new_line();
    editor.add_text("This is a real-world document editor example.");
    editor.add_new_line();
    editor.add_tab_space();
    editor.add_text("Indented text after a tab space.");
    editor.add_new_line();
    editor.add_image("picture.jpg");

    print!("{}", render_document(editor.document()));

    match editor.save_document() {
        Ok(()) => println!("Document saved to {SAVE_TARGET}"),
        Err(err) => {
            warn!("event=demo_save module=cli status=error error={err}");
            println!("Error: unable to save document: {err}");
        }
    }
}
