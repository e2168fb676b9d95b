//! Localized UI strings.

/// Chat error line when a failure carries no message.
pub const UNKNOWN_ERROR: &str = "알 수 없는 오류가 발생했습니다.";
/// Shown when the conversation is empty.
pub const EMPTY_CONVERSATION: &str = "블로그에 대해 질문해 보세요!";
/// Shown while an answer is being generated.
pub const GENERATING: &str = "답변을 생성하고 있습니다...";
/// Heading of the citation list.
pub const SOURCES_HEADING: &str = "참고 글:";
/// Feedback prompt under a rateable answer.
pub const FEEDBACK_PROMPT: &str = "도움이 됐나요?";
/// Feedback request in flight.
pub const FEEDBACK_SENDING: &str = "전송 중...";
/// Feedback accepted; followed by the rating emoji.
pub const FEEDBACK_THANKS: &str = "피드백 감사합니다";
/// Input prompt placeholder.
pub const INPUT_PLACEHOLDER: &str = "질문을 입력하세요...";

/// Whole-page error when statistics cannot be fetched.
pub const STATS_LOAD_FAILED: &str = "통계 데이터를 불러오지 못했습니다.";
pub const DASHBOARD_TITLE: &str = "Admin 대시보드";
pub const CARD_TOTAL_QUERIES: &str = "총 질문 수";
pub const CARD_TOTAL_QUERIES_DESC: &str = "전체 누적";
pub const CARD_FEEDBACK: &str = "피드백 점수";
pub const CARD_RESPONSE_TIME: &str = "평균 응답 시간";
pub const CARD_RESPONSE_TIME_DESC: &str = "retrieval + generation";
pub const CARD_SEARCH_FAILURE: &str = "검색 실패율";
pub const CARD_SEARCH_FAILURE_DESC: &str = "관련 문서 미발견";
pub const CHART_TITLE: &str = "일별 질문 수";
pub const TOP_QUESTIONS_TITLE: &str = "인기 질문 TOP 10";
pub const NO_DATA: &str = "데이터 없음";
/// Suffix for a question count ("3회").
pub const TIMES_SUFFIX: &str = "회";
pub const COLLECTIONS_TITLE: &str = "인덱싱 현황";
/// Label before the total in the collection panel.
pub const COLLECTIONS_TOTAL: &str = "총 질문 수";
/// Suffix for the total in the collection panel ("8건").
pub const COUNT_SUFFIX: &str = "건";
