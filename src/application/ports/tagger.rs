//! Build tag port interface

/// Port for generating build/release tags
pub trait Tagger: Send + Sync {
    fn tag(&self) -> String;
}

/// Blanket implementation for boxed taggers
impl Tagger for Box<dyn Tagger> {
    fn tag(&self) -> String {
        self.as_ref().tag()
    }
}
