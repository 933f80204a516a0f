//! Line-oriented front end over [`App`]: one command per line, one JSON reply
//! per line.
//!
//! ```text
//! search [requête...]           filter <catégorie|all>
//! feed                           like <oeuvre>
//! detail <oeuvre>                offer <oeuvre>  confirm | cancel
//! artist <artiste>               back
//! login <artiste>                dashboard       leave
//! profile [nom | avatar | bio]
//! collection <titre> [| concept]
//! artwork <titre> | <url> | <prix> | <année> | <catégorie> [| description]
//! quit
//! ```

use std::io::{self, BufRead, Write};

use macollection_core::domain::Category;
use macollection_core::ports::StateStore;
use macollection_core::services::exhibitor::{NewArtworkDraft, NewCollectionDraft};
use serde::Serialize;
use serde_json::json;

use crate::{App, ProfileDto};

/// Reads commands until EOF or `quit`. Command errors are reported on the
/// output and do not stop the loop; only I/O errors do.
pub fn run_commands<S, R, W>(app: &App<S>, input: R, mut output: W) -> io::Result<()>
where
  S: StateStore,
  R: BufRead,
  W: Write,
{
  for line in input.lines() {
    let line = line?;
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    if line == "quit" || line == "exit" {
      break;
    }

    let reply = match execute(app, line) {
      Ok(value) => value,
      Err(e) => {
        log::debug!("command failed: {line}: {e}");
        json!({ "error": e })
      }
    };
    writeln!(output, "{reply}")?;
  }
  output.flush()
}

fn to_json<T: Serialize>(value: T) -> Result<serde_json::Value, String> {
  serde_json::to_value(value).map_err(|e| e.to_string())
}

/// Splits `a | b | c` into trimmed fields.
fn fields(rest: &str) -> Vec<String> {
  rest.split('|').map(|f| f.trim().to_string()).collect()
}

fn execute<S: StateStore>(app: &App<S>, line: &str) -> Result<serde_json::Value, String> {
  let (cmd, rest) = line.split_once(' ').map(|(c, r)| (c, r.trim())).unwrap_or((line, ""));

  match cmd {
    "search" => to_json(app.catalog_query(rest)?),
    "filter" => to_json(app.catalog_filter(if rest.is_empty() { "all" } else { rest })?),
    "feed" => to_json(app.feed_list()?),
    "like" => to_json(app.artwork_toggle_like(rest)?),
    "detail" => to_json(app.artwork_detail(rest)?),
    "offer" => to_json(app.offer_open(rest)?),
    "confirm" => {
      app.offer_confirm()?;
      Ok(json!({ "confirmed": true }))
    }
    "cancel" => {
      app.offer_close()?;
      Ok(json!({ "confirmed": false }))
    }
    "artist" => to_json(app.artist_profile(rest)?),
    "back" => {
      app.back_to_feed()?;
      Ok(json!({ "ok": true }))
    }
    "login" => to_json(app.exhibitor_login(rest)?),
    "profile" if rest.is_empty() => to_json(app.exhibitor_profile()?),
    "profile" => {
      let f = fields(rest);
      let get = |i: usize| f.get(i).cloned().unwrap_or_default();
      to_json(app.exhibitor_update_profile(ProfileDto { name: get(0), avatar_url: get(1), bio: get(2) })?)
    }
    "dashboard" => to_json(app.exhibitor_dashboard()?),
    "leave" => {
      app.exhibitor_leave()?;
      Ok(json!({ "ok": true }))
    }
    "collection" => {
      let f = fields(rest);
      let draft = NewCollectionDraft {
        title: f.first().cloned().unwrap_or_default(),
        concept: f.get(1).cloned().unwrap_or_default(),
      };
      to_json(app.exhibitor_add_collection(draft)?)
    }
    "artwork" => {
      let f = fields(rest);
      let get = |i: usize| f.get(i).cloned().unwrap_or_default();
      let mut draft =
        NewArtworkDraft { title: get(0), image_url: get(1), price: get(2), year: get(3), description: get(5), ..Default::default() };
      if let Some(category) = f.get(4).filter(|c| !c.is_empty()) {
        draft.category = category.parse::<Category>().map_err(|e| e.to_string())?;
      }
      to_json(app.exhibitor_add_artwork(draft)?)
    }
    other => Err(format!("unknown command: {other}")),
  }
}
