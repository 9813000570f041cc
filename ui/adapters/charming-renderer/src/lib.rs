pub use renderer::CharmingRenderer;

mod figure;
mod renderer;
