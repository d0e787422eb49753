// ABOUTME: The compiled-in tool list - every calculator, game, and app page
// ABOUTME: the site serves, with the keywords search matches against.

use super::{Category, ToolEntry};

/// (name, url, category, keywords, icon)
type Row = (
    &'static str,
    &'static str,
    Category,
    &'static [&'static str],
    &'static str,
);

const CALCULATORS: &[Row] = &[
    (
        "BMI Calculator",
        "/calculators/bmi-calculator",
        Category::Calculator,
        &["bmi", "body mass index", "weight", "height", "health"],
        "⚖️",
    ),
    (
        "Body Fat Calculator",
        "/calculators/body-fat-calculator",
        Category::Calculator,
        &["body fat", "fitness", "health", "navy method"],
        "💪",
    ),
    (
        "Calorie Calculator",
        "/calculators/calorie-calculator",
        Category::Calculator,
        &["calories", "tdee", "bmr", "diet", "health"],
        "🍎",
    ),
    (
        "Mortgage Calculator",
        "/calculators/mortgage-calculator",
        Category::Calculator,
        &["mortgage", "home loan", "interest", "amortization", "finance"],
        "🏠",
    ),
    (
        "Loan Calculator",
        "/calculators/loan-calculator",
        Category::Calculator,
        &["loan", "interest", "monthly payment", "finance"],
        "🏦",
    ),
    (
        "Compound Interest Calculator",
        "/calculators/compound-interest-calculator",
        Category::Calculator,
        &["interest", "savings", "investment", "finance"],
        "📈",
    ),
    (
        "Markup Calculator",
        "/calculators/markup-calculator",
        Category::Calculator,
        &["markup", "margin", "profit", "pricing", "finance"],
        "🏷️",
    ),
    (
        "Tip Calculator",
        "/calculators/tip-calculator",
        Category::Calculator,
        &["tip", "gratuity", "restaurant", "split bill"],
        "💵",
    ),
    (
        "Percentage Calculator",
        "/calculators/percentage-calculator",
        Category::Calculator,
        &["percent", "percentage", "ratio", "math"],
        "➗",
    ),
    (
        "Age Calculator",
        "/calculators/age-calculator",
        Category::Calculator,
        &["age", "birthday", "date", "years"],
        "🎂",
    ),
    (
        "Date Difference Calculator",
        "/calculators/date-difference-calculator",
        Category::Calculator,
        &["date", "days between", "duration", "calendar"],
        "📅",
    ),
    (
        "Area Calculator",
        "/calculators/area-calculator",
        Category::Calculator,
        &["area", "square feet", "geometry", "math"],
        "📐",
    ),
    (
        "Unit Converter",
        "/calculators/unit-converter",
        Category::Calculator,
        &["units", "conversion", "length", "weight", "temperature"],
        "🔁",
    ),
    (
        "Wave Speed Calculator",
        "/calculators/wave-speed-calculator",
        Category::Calculator,
        &["wave", "frequency", "wavelength", "physics"],
        "🌊",
    ),
    (
        "Recipe Scaler",
        "/calculators/recipe-scaler",
        Category::Calculator,
        &["recipe", "servings", "cooking", "fractions"],
        "🍳",
    ),
];

const GAMES: &[Row] = &[
    (
        "Snake",
        "/games/snake",
        Category::Game,
        &["snake", "arcade", "classic"],
        "🐍",
    ),
    (
        "2048",
        "/games/2048",
        Category::Game,
        &["2048", "puzzle", "tiles", "numbers"],
        "🔢",
    ),
    (
        "Minesweeper",
        "/games/minesweeper",
        Category::Game,
        &["minesweeper", "mines", "puzzle", "classic"],
        "💣",
    ),
    (
        "Sudoku",
        "/games/sudoku",
        Category::Game,
        &["sudoku", "puzzle", "numbers", "logic"],
        "🧩",
    ),
    (
        "Tic Tac Toe",
        "/games/tic-tac-toe",
        Category::Game,
        &["tic tac toe", "noughts and crosses", "two player"],
        "❌",
    ),
    (
        "Memory Match",
        "/games/memory-match",
        Category::Game,
        &["memory", "cards", "matching", "concentration"],
        "🃏",
    ),
    (
        "Word Guess",
        "/games/word-guess",
        Category::Game,
        &["word", "guess", "letters", "daily puzzle"],
        "🔤",
    ),
    (
        "Block Stacker",
        "/games/block-stacker",
        Category::Game,
        &["blocks", "falling", "arcade", "tetromino"],
        "🧱",
    ),
];

const APPS: &[Row] = &[
    (
        "Base64 Encoder",
        "/apps/base64-encoder",
        Category::App,
        &["base64", "encode", "decode", "developer"],
        "🔐",
    ),
    (
        "Spin Wheel",
        "/apps/spin-wheel",
        Category::App,
        &["wheel", "random", "picker", "decision"],
        "🎡",
    ),
    (
        "Syllable Counter",
        "/apps/syllable-counter",
        Category::App,
        &["syllables", "poetry", "haiku", "writing"],
        "📝",
    ),
    (
        "Word Counter",
        "/apps/word-counter",
        Category::App,
        &["words", "characters", "writing", "text"],
        "🔠",
    ),
    (
        "Password Generator",
        "/apps/password-generator",
        Category::App,
        &["password", "security", "random"],
        "🔑",
    ),
    (
        "Random Number Generator",
        "/apps/random-number-generator",
        Category::App,
        &["random", "numbers", "dice"],
        "🎲",
    ),
    (
        "QR Code Generator",
        "/apps/qr-code-generator",
        Category::App,
        &["qr", "barcode", "share"],
        "🔳",
    ),
    (
        "Stopwatch",
        "/apps/stopwatch",
        Category::App,
        &["timer", "time", "lap"],
        "⏱️",
    ),
    (
        "Color Picker",
        "/apps/color-picker",
        Category::App,
        &["color", "hex", "rgb", "design"],
        "🎨",
    ),
    (
        "JSON Formatter",
        "/apps/json-formatter",
        Category::App,
        &["json", "format", "pretty print", "developer"],
        "🧾",
    ),
];

/// Every built-in entry: calculators, then games, then apps.
pub(super) fn entries() -> impl Iterator<Item = ToolEntry> {
    CALCULATORS
        .iter()
        .chain(GAMES)
        .chain(APPS)
        .map(|&(name, url, category, keywords, icon)| {
            ToolEntry::new(name, url, category)
                .keywords(keywords.iter().copied())
                .icon(icon)
        })
}
