use crate::core::zodiac::Zodiac;
use crate::domain::model::{SamjaeInfo, UserProfile};

/// Tone directive appended to every prompt.
const TONE_DIRECTIVE: &str =
    "말투는 신비롭지만 진정성 있게, 마치 노스승이 제자에게 조언하듯 작성해주세요.";

/// Output-format directive appended to every prompt.
const FORMAT_DIRECTIVE: &str = "답변 형식은 가독성 좋은 Markdown으로 작성하세요.";

/// Builds the full fortune-reading prompt for the generative model.
///
/// Pure string construction: same inputs always yield byte-identical output.
/// An empty `profile.name` is a precondition the caller enforces before
/// getting here.
pub fn compose(profile: &UserProfile, zodiac: Zodiac, samjae: &SamjaeInfo) -> String {
    let context = if samjae.is_samjae {
        format!(
            "내담자는 2026년 '눌삼재'에 해당하는 {zodiac}띠입니다.\n\
             - 삼재 기간: {period}\n\
             - 현재 상태: {status} ({year_th})\n\n\
             삼재(Three Calamities)는 9년마다 돌아오는 3가지 재난을 의미하며, \
             눌삼재는 그 중 두 번째 해로, 액운이 머무는 시기라 하여 주의가 필요합니다.\n\
             내담자에게 삼재 기간({period})을 명확히 인지시키고, \
             경각심을 주되 슬기롭게 극복할 수 있는 조언을 해주세요.",
            zodiac = zodiac.korean(),
            period = samjae.period,
            status = samjae.status,
            year_th = samjae.year_th,
        )
    } else {
        format!(
            "내담자는 2026년 삼재에 해당하지 않습니다 ({zodiac}띠).\n\
             매우 다행스러운 일임을 알려주고, 더욱 발전할 수 있는 긍정적인 조언을 해주세요.",
            zodiac = zodiac.korean(),
        )
    };

    let behavior_request = if samjae.is_samjae {
        "(삼재인 경우) 삼재를 무사히 넘기기 위한 **구체적인 행동 수칙 3가지**를 제안해주세요."
    } else {
        "(삼재가 아닌 경우) 올해를 기회로 삼기 위한 **행운의 행동 3가지**를 제안해주세요."
    };

    let concern = profile.concern.as_deref().unwrap_or("");

    format!(
        "당신은 전통 명리학과 삼재 풀이의 대가입니다. 지금은 2026년(병오년, 붉은 말의 해)입니다.\n\n\
         [내담자 정보]\n\
         - 이름: {name}\n\
         - 성별: {gender}\n\
         - 생년월일: {birth_date} ({zodiac}띠)\n\
         - 삼재 여부: {status}\n\
         - 삼재 기간: {period}\n\
         - 고민 사항: {concern}\n\n\
         {context}\n\n\
         [요청사항]\n\
         1. 2026년 병오년의 기운과 내담자의 조화를 설명해주세요.\n\
         2. **[필수] 내담자의 삼재 기간({period})과 현재 상태({status})를 명확히 언급해주세요.**\n\
         3. {behavior_request}\n\
         4. 고민 내용({concern})에 대한 맞춤형 조언을 해주세요.\n\
         5. 마지막으로 나쁜 기운을 막아주는 **행운의 아이템(부적 역할)**을 하나 추천해주세요.\n\n\
         {tone}\n\
         {fmt}",
        name = profile.name,
        gender = profile.gender,
        birth_date = profile.birth_date.format("%Y년 %m월 %d일"),
        zodiac = zodiac.korean(),
        status = samjae.status,
        period = samjae.period,
        concern = concern,
        context = context,
        behavior_request = behavior_request,
        tone = TONE_DIRECTIVE,
        fmt = FORMAT_DIRECTIVE,
    )
}
