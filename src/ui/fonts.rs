// Las fuentes por defecto de egui no traen glifos CJK: sin esto las
// explicaciones y etiquetas en chino salen como cuadros.
use egui::{Context, FontData, FontDefinitions, FontFamily};
use std::path::Path;
use std::sync::Arc;

const CJK_FONT_NAME: &str = "cjk_fallback";

const CJK_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
];

fn first_existing<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|p| Path::new(p).is_file())
}

/// Añade la primera fuente CJK del sistema como fallback de egui
pub fn install_cjk_font(ctx: &Context) {
    // La build web no tiene sistema de ficheros ni fuente CJK embebida:
    // ahí el texto en chino se ve como cuadros vacíos.
    if cfg!(target_arch = "wasm32") {
        log::warn!("Sin sistema de ficheros en WASM: se usan las fuentes por defecto");
        return;
    }

    let Some(path) = first_existing(CJK_FONT_CANDIDATES) else {
        log::warn!("No se encontró ninguna fuente CJK; el texto en chino puede no verse");
        return;
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("No se pudo leer la fuente {path}: {e}");
            return;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("Fuente CJK cargada desde {path}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_candidates_yield_none() {
        assert_eq!(first_existing(&["/definitely/not/a/font.ttc"]), None);
    }

    #[test]
    fn first_existing_file_wins() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        assert_eq!(
            first_existing(&["/definitely/not/a/font.ttc", manifest]),
            Some(manifest)
        );
    }
}
