/// Round prompt. Placeholders: `{topic}`, `{vibe}`, `{context}`.
pub const ROUND_PROMPT_TEMPLATE: &str = r#"Ты ведущий барного квиза. Тема раунда: «{topic}». Настроение ведущего: {vibe}.

## КОНТЕКСТ

{context}

## ЗАДАНИЕ

Составь ровно 10 вопросов для раунда с короткими ответами, опираясь на контекст.

## ПРАВИЛА ОФОРМЛЕНИЯ

- Поле "title" (вопрос) не длиннее 200 символов.
- Поле "value" (ответ) не длиннее 60 символов: одно слово, число или короткая фраза.
- Первые 5 вопросов начинай с маркера «Правда или миф:» и формулируй как утверждение; ответ только «Правда» или «Миф».
- Остальные 5 вопросов начинай с маркера «Угадай:» и формулируй как загадку с подсказками; ответ — отгадка.
- Пиши живо, в заданном настроении, без канцелярита.

## ЗАПРЕТЫ

- Не упоминай реальные адреса, даты и названия существующих баров, ресторанов и компаний.
- Не упоминай имена реальных людей.
- Не добавляй пояснений, нумерации и markdown — только данные."#;

/// Substituted for `{context}` when nothing usable was gathered from the web.
/// Placeholder: `{topic}`.
pub const FALLBACK_CONTEXT_TEMPLATE: &str = r#"Свежих материалов из интернета по теме «{topic}» найти не удалось.
Опирайся на общие знания о теме «{topic}»: происхождение, технологию, традиции подачи, популярные мифы и забавные особенности.
Не выдумывай конкретных фактов, цифр, дат и названий — вопросы должны оставаться верными независимо от источника."#;

/// Appended to every prompt before it is sent to the model.
pub const JSON_SCHEMA_INSTRUCTION: &str = r#"IMPORTANT: Output MUST be a valid JSON strictly following this schema:
{
  "data": [
    {
      "title": "Текст вопроса",
      "value": "Ответ"
    }
  ]
}
Do not add any markdown formatting or explanations. Just the JSON."#;
