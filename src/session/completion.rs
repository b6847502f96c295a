/// `round(100 * score / total)`; 0 si no hay preguntas
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 * 100.0 / total as f64).round() as u32
}

/// Tramo de la nota final
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTier {
    Master,
    Good,
    Fair,
    KeepPracticing,
}

impl ResultTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            // 100 exacto primero: la puntuación sobrevive a un cambio de
            // filtro, así que el porcentaje puede pasar de 100
            100 => ResultTier::Master,
            80.. => ResultTier::Good,
            60..=79 => ResultTier::Fair,
            _ => ResultTier::KeepPracticing,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Master => "太棒了！你是语法大师！",
            ResultTier::Good => "做得好！继续保持！",
            ResultTier::Fair => "不错，还有进步空间哦。",
            ResultTier::KeepPracticing => "别灰心，多练习一定会变强！",
        }
    }
}
