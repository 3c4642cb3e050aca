//! Component text generation.
//!
//! The emitted text is a self-contained function component for the `motion/react` runtime. It
//! embeds the literal path data and the per-path timing, printed with three decimals, that the
//! preview scene animates in memory.

use std::fmt::Write as _;

use crate::{
    export::options::ExportOptions,
    foundation::{error::SigResult, fixed::to_fixed},
    path::bounds::ViewBox,
    scene::frame::REVEAL_FADE,
    signature::{AnimationMode, InputMode, Signature},
    timing::schedule::{TIME_DIGITS, TimingEntry},
};

const MASK_ID: &str = "signature-wipe";

/// Generate the component text for `signature`.
///
/// Returns an empty string when the signature has no paths.
#[tracing::instrument(skip(signature, options), fields(paths = signature.len(), mode = %options.animation_mode))]
pub fn generate_motion_component(signature: &Signature, options: &ExportOptions) -> SigResult<String> {
    options.validate()?;
    if signature.is_empty() {
        tracing::debug!("nothing to export");
        return Ok(String::new());
    }

    let total = options.total_duration(signature.input);
    let mut body = String::new();
    match (signature.input, options.animation_mode) {
        (InputMode::Type, AnimationMode::Fill) => {
            write_wipe_mask(&mut body, &signature.view_box, total, options);
            for (i, d) in signature.path_data().enumerate() {
                let _ = writeln!(body, "      {{/* glyph {}: base */}}", i + 1);
                let _ = writeln!(
                    body,
                    r#"      <path d="{d}" fill="{}" fillOpacity={{{}}} />"#,
                    options.base_stroke_color.to_hex(),
                    options.base_opacity
                );
            }
            let _ = writeln!(body, r#"      <g mask="url(#{MASK_ID})">"#);
            for d in signature.path_data() {
                let _ = writeln!(
                    body,
                    r#"        <path d="{d}" fill="{}" />"#,
                    options.fill_color.to_hex()
                );
            }
            body.push_str("      </g>\n");
        }
        (_, mode) => {
            let timing = signature.timing(total);
            for (i, (d, t)) in signature.path_data().zip(timing).enumerate() {
                if mode == AnimationMode::Fill {
                    let _ = writeln!(body, "      {{/* stroke {}: base (ink indent) */}}", i + 1);
                    write_base_stroke(&mut body, d, options);
                    let _ = writeln!(body, "      {{/* stroke {}: animated fill */}}", i + 1);
                }
                write_reveal(&mut body, d, t, options);
            }
        }
    }

    Ok(wrap_component(&options.component_name, &signature.view_box, &body))
}

fn wrap_component(name: &str, view_box: &ViewBox, body: &str) -> String {
    let mut out = String::new();
    out.push_str("import { motion } from \"motion/react\";\n\n");
    let _ = writeln!(out, "export function {name}() {{");
    out.push_str("  return (\n");
    out.push_str("    <motion.svg\n");
    let _ = writeln!(out, "      viewBox=\"{view_box}\"");
    out.push_str("      fill=\"none\"\n");
    out.push_str("      xmlns=\"http://www.w3.org/2000/svg\"\n");
    out.push_str("    >\n");
    out.push_str(body);
    out.push_str("    </motion.svg>\n");
    out.push_str("  );\n");
    out.push_str("}\n");
    out
}

fn time(v: f64) -> String {
    to_fixed(v, TIME_DIGITS)
}

fn write_base_stroke(out: &mut String, d: &str, options: &ExportOptions) {
    out.push_str("      <path\n");
    let _ = writeln!(out, "        d=\"{d}\"");
    out.push_str("        fill=\"none\"\n");
    let _ = writeln!(out, "        stroke=\"{}\"", options.base_stroke_color.to_hex());
    let _ = writeln!(out, "        strokeWidth={{{}}}", options.stroke_width);
    out.push_str("        strokeLinecap=\"round\"\n");
    out.push_str("        strokeLinejoin=\"round\"\n");
    let _ = writeln!(out, "        strokeOpacity={{{}}}", options.base_opacity);
    out.push_str("      />\n");
}

fn write_reveal(out: &mut String, d: &str, timing: TimingEntry, options: &ExportOptions) {
    out.push_str("      <motion.path\n");
    let _ = writeln!(out, "        d=\"{d}\"");
    out.push_str("        fill=\"none\"\n");
    let _ = writeln!(out, "        stroke=\"{}\"", options.stroke_color.to_hex());
    let _ = writeln!(out, "        strokeWidth={{{}}}", options.stroke_width);
    out.push_str("        strokeLinecap=\"round\"\n");
    out.push_str("        strokeLinejoin=\"round\"\n");
    out.push_str("        initial={{ pathLength: 0, opacity: 0 }}\n");
    out.push_str("        animate={{ pathLength: 1, opacity: 1 }}\n");
    out.push_str("        transition={{\n");
    let _ = writeln!(
        out,
        "          pathLength: {{ duration: {}, ease: \"{}\", delay: {} }},",
        time(timing.duration),
        options.easing,
        time(timing.delay)
    );
    let _ = writeln!(
        out,
        "          opacity: {{ duration: {REVEAL_FADE}, delay: {} }},",
        time(timing.delay)
    );
    out.push_str("        }}\n");
    out.push_str("      />\n");
}

fn write_wipe_mask(out: &mut String, view_box: &ViewBox, duration: f64, options: &ExportOptions) {
    let (x, y, w, h) = (
        to_fixed(view_box.x, 2),
        to_fixed(view_box.y, 2),
        to_fixed(view_box.width, 2),
        to_fixed(view_box.height, 2),
    );
    let _ = writeln!(out, "      <mask id=\"{MASK_ID}\">");
    let _ = writeln!(
        out,
        "        <rect x={{{x}}} y={{{y}}} width={{{w}}} height={{{h}}} fill=\"black\" />"
    );
    out.push_str("        <motion.rect\n");
    let _ = writeln!(out, "          x={{{x}}}");
    let _ = writeln!(out, "          y={{{y}}}");
    let _ = writeln!(out, "          width={{{w}}}");
    let _ = writeln!(out, "          height={{{h}}}");
    out.push_str("          fill=\"white\"\n");
    out.push_str("          initial={{ width: 0 }}\n");
    let _ = writeln!(out, "          animate={{{{ width: {w} }}}}");
    let _ = writeln!(
        out,
        "          transition={{{{ duration: {}, ease: \"{}\" }}}}",
        time(duration),
        options.easing
    );
    out.push_str("        />\n");
    out.push_str("      </mask>\n");
}

#[cfg(test)]
#[path = "../../tests/unit/export/motion.rs"]
mod tests;
