use crate::VERSION;

pub(super) fn run() {
    println!("changesets {VERSION}");
}
