mod clock;
mod demo;
mod error;
mod primitives;
mod rotator;
mod stage;
#[cfg(test)]
mod testing;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("cannot initialize console_log");
    dioxus::launch(demo::Demo);
}
