//! Interactive chat session.

use crate::Renderer;
use kesra_core::{respond, Dataset};
use std::io::{self, BufRead, Write};

/// Inputs that end the session.
const QUIT_WORDS: [&str; 3] = ["keluar", "exit", "quit"];

/// Print the session banner: project info and usage hints.
///
/// # Errors
///
/// Propagates IO errors from the writer.
pub fn banner(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Chat Kesejahteraan Daerah Jawa Timur")?;
    writeln!(out, "Metode: Agglomerative Hierarchical Clustering")?;
    writeln!(out)?;
    writeln!(out, "Tanyakan nama kabupaten/kota atau gunakan perintah seperti:")?;
    writeln!(
        out,
        "  kabupaten tinggi | kota rendah | daftar sedang | jelaskan cluster sedang"
    )?;
    writeln!(out, "Ketik 'keluar' untuk mengakhiri sesi.")
}

/// Run the interactive loop: prompt, read a line, answer, repeat.
///
/// The session ends on EOF or a quit word. Blank input is ignored, matching
/// the dashboard's react-only-to-submissions behavior.
///
/// # Errors
///
/// Propagates IO errors from the reader or writer.
pub fn run_session(
    dataset: &Dataset,
    renderer: &Renderer,
    mut input: impl BufRead,
    out: &mut dyn Write,
) -> io::Result<()> {
    banner(out)?;
    writeln!(out, "{} daerah dimuat.", dataset.len())?;

    let mut line = String::new();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&query.to_lowercase().as_str()) {
            break;
        }
        renderer.answer(out, &respond(dataset, query))?;
    }
    writeln!(out, "Sesi selesai.")
}
