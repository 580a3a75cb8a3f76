//! Take the real estate survey against an in-memory store, then show the dashboard.
//!
//! Run with: cargo run -p intake-dialoguer-wizard --example real_estate

use intake::surveys::RealEstateSurvey;
use intake::{Dashboard, Gateway, MemoryStore, Session};
use intake_dialoguer_wizard::{DialoguerWizard, TerminalNotifier, screens};

fn main() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let gateway = Gateway::new(&store, &TerminalNotifier);

    let mut session = Session::<RealEstateSurvey>::new();
    let route = DialoguerWizard::new().run(&gateway, &mut session)?;
    println!("finished at {route}");

    println!("{}", screens::dashboard(&Dashboard::fetch(&store)));
    Ok(())
}
