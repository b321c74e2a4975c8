//! Lists every catalog icon with the asset path it is served from, i.e. the
//! files the static asset directory has to provide.

use publicon::catalog::{icon_src, IconKind};

fn main() {
    env_logger::init();

    for kind in IconKind::ALL {
        println!("{} icons ({}):", kind, kind.icons().len());
        for icon in kind.icons() {
            println!("  {:<16} {}", icon, icon_src(icon, kind));
        }
    }
}
