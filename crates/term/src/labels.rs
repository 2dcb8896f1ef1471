//! Localized text for the table view.

use crate::types::{Difficulty, Language};

/// Every string the table view draws, in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub new_game: &'static str,
    pub deal: &'static str,
    pub undo: &'static str,
    pub redo: &'static str,
    pub score: &'static str,
    pub time: &'static str,
    pub moves: &'static str,
    pub stock: &'static str,
    pub completed: &'static str,
    pub difficulty: &'static str,
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
    pub game_complete: &'static str,
    pub game_complete_message: &'static str,
    pub play_again: &'static str,
    pub sound: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub language: &'static str,
    pub language_name: &'static str,
    pub press_to_start: &'static str,
    pub reset: &'static str,
    pub quit: &'static str,
}

const EN: Labels = Labels {
    title: "Spider Solitaire",
    new_game: "New Game",
    deal: "Deal",
    undo: "Undo",
    redo: "Redo",
    score: "Score",
    time: "Time",
    moves: "Moves",
    stock: "Stock",
    completed: "Done",
    difficulty: "Difficulty",
    easy: "Easy (1 Suit)",
    medium: "Medium (2 Suits)",
    hard: "Hard (4 Suits)",
    game_complete: "Congratulations!",
    game_complete_message: "You completed the game!",
    play_again: "Play Again",
    sound: "Sound",
    on: "on",
    off: "off",
    language: "Language",
    language_name: "English",
    press_to_start: "Press 1, 2 or 4 to start",
    reset: "Reset",
    quit: "Quit",
};

const ES: Labels = Labels {
    title: "Solitario Araña",
    new_game: "Juego Nuevo",
    deal: "Repartir",
    undo: "Deshacer",
    redo: "Rehacer",
    score: "Puntuación",
    time: "Tiempo",
    moves: "Movimientos",
    stock: "Mazo",
    completed: "Hechas",
    difficulty: "Dificultad",
    easy: "Fácil (1 Palo)",
    medium: "Medio (2 Palos)",
    hard: "Difícil (4 Palos)",
    game_complete: "¡Felicidades!",
    game_complete_message: "¡Completaste el juego!",
    play_again: "Jugar de Nuevo",
    sound: "Sonido",
    on: "sí",
    off: "no",
    language: "Idioma",
    language_name: "Español",
    press_to_start: "Pulsa 1, 2 o 4 para empezar",
    reset: "Reiniciar",
    quit: "Salir",
};

const ZH: Labels = Labels {
    title: "蜘蛛纸牌",
    new_game: "新游戏",
    deal: "发牌",
    undo: "撤销",
    redo: "重做",
    score: "得分",
    time: "时间",
    moves: "步数",
    stock: "牌堆",
    completed: "完成",
    difficulty: "难度",
    easy: "简单 (1花色)",
    medium: "中等 (2花色)",
    hard: "困难 (4花色)",
    game_complete: "恭喜！",
    game_complete_message: "您完成了游戏！",
    play_again: "再玩一次",
    sound: "音效",
    on: "开",
    off: "关",
    language: "语言",
    language_name: "中文",
    press_to_start: "按 1、2 或 4 开始",
    reset: "重置",
    quit: "退出",
};

/// Label table for `language`
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Zh => &ZH,
    }
}

impl Labels {
    pub fn difficulty_name(&self, difficulty: Difficulty) -> &'static str {
        match difficulty {
            Difficulty::OneSuit => self.easy,
            Difficulty::TwoSuits => self.medium,
            Difficulty::FourSuits => self.hard,
        }
    }
}

/// `m:ss`
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
