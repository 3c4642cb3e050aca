/// `motion/react` component generator.
pub mod motion;
/// Styling and timing options.
pub mod options;
