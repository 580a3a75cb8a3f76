//! The user survey with the plain (no color) theme.
//!
//! Run with: cargo run -p intake-dialoguer-wizard --example plain_user

use intake::surveys::UserSurvey;
use intake::{Gateway, MemoryStore, Session};
use intake_dialoguer_wizard::{DialoguerWizard, TerminalNotifier};

fn main() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let gateway = Gateway::new(&store, &TerminalNotifier);

    let mut session = Session::<UserSurvey>::new();
    DialoguerWizard::plain().run(&gateway, &mut session)?;

    for row in store.rows("user_surveys") {
        println!("{row:#}");
    }
    Ok(())
}
