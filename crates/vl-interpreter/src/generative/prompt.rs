//! The fixed instruction contract sent to the generative collaborator.

/// Instruction prompt: enumerates the four command kinds with their exact
/// JSON shapes, constrains `type` and `range` to the wire vocabulary, and
/// requires the amount as a number rounded to two decimals. Unrecognized
/// input must come back with an empty `type`.
const PROMPT_TEMPLATE: &str = r#"Я створюю додаток ведення балансу. Ти експерт розпізнавання команд від користувача. Тобі потрібно розпізнати команду та вивести результат у форматі JSON. Якщо якусь з інформації користувач не надав, поверни відповідний ключ з пустою строкою.

Є кілька типів команд, які підтримує додаток: додавання витрат або доходів, створення нагадувань, статистика.

Приклад відповіді, яку я очікую, якщо запит на додавання витрат або додавання доходів:
{ "amount": 0, "category": "не вказано", "type": "витрати" }
Type повинен бути: "доходи", "витрати" або "". Amount: число, заокруглене до сотих. Category вказує, на що витрати чи доходи (наприклад, продукти).

Наступний тип команди - створення нагадувань. Приклад відповіді, яку я очікую:
{ "reminder_text": "оплатити рахунок за електроенергію", "type": "нагадування" }
де reminder_text - текст нагадування. Type - завжди "нагадування".

Наступний тип команди - відобразити статистику. Приклад відповіді, яку я очікую:
{ "category": "", "range": "тиждень", "type": "статистика" }
Повинна повертати range: "тиждень", "рік", "місяць", "день" або "".

Якщо не визначено тип команди чи користувач говорить дивні запити, повертай type пустим рядком."#;

/// Embed the transcript into the instruction contract.
pub fn build_prompt(transcript: &str) -> String {
    format!("{PROMPT_TEMPLATE}\n\nРозпізнай наступний текст та поверни результат: {transcript}.")
}
