mod round;
mod title;

pub use round::RoundScene;
pub use title::TitleScene;

pub enum SceneTransition {
    None,
    Push(Box<dyn Scene>),
    Pop,
    Replace(Box<dyn Scene>),
}

pub trait Scene {
    fn update(&mut self) -> SceneTransition;
    fn draw(&self);
}
