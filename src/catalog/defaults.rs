//! Compiled-in default catalog
//!
//! General provisions of the Local Tax Act (지방세법) relevant to
//! acquisition tax. Used whenever no fresh snapshot is stored.

use super::model::{Catalog, LawEntry, LawSection};

struct DefaultLaw {
    title: &'static str,
    url: &'static str,
    keywords: &'static [&'static str],
}

struct DefaultSection {
    title: &'static str,
    laws: &'static [DefaultLaw],
}

const LOCAL_TAX_ACT: &[DefaultSection] = &[
    DefaultSection {
        title: "지방세법 - 통칙",
        laws: &[
            DefaultLaw {
                title: "지방세법 제6조(정의)",
                url: "https://www.law.go.kr/법령/지방세법/제6조",
                keywords: &["취득세", "용어", "정의", "취득", "부동산"],
            },
            DefaultLaw {
                title: "지방세법 제7조(납세의무자 등)",
                url: "https://www.law.go.kr/법령/지방세법/제7조",
                keywords: &["취득세", "납세의무자", "취득", "부동산등", "소유자"],
            },
            DefaultLaw {
                title: "지방세법 제8조(납세지)",
                url: "https://www.law.go.kr/법령/지방세법/제8조",
                keywords: &["취득세", "납세지", "부동산", "소재지", "차량"],
            },
            DefaultLaw {
                title: "지방세법 제9조(비과세)",
                url: "https://www.law.go.kr/법령/지방세법/제9조",
                keywords: &["취득세", "비과세", "국가", "지방자치단체", "신탁"],
            },
        ],
    },
    DefaultSection {
        title: "지방세법 - 과세표준과 세율",
        laws: &[
            DefaultLaw {
                title: "지방세법 제10조(과세표준의 기준)",
                url: "https://www.law.go.kr/법령/지방세법/제10조",
                keywords: &["취득세", "과세표준", "기준", "취득당시가액", "연부금액"],
            },
            DefaultLaw {
                title: "지방세법 제10조의2(무상취득의 경우 과세표준)",
                url: "https://www.law.go.kr/법령/지방세법/제10조의2",
                keywords: &["취득세", "무상취득", "과세표준", "시가인정액", "시가표준액"],
            },
            DefaultLaw {
                title: "지방세법 제10조의3(유상승계취득의 경우 과세표준)",
                url: "https://www.law.go.kr/법령/지방세법/제10조의3",
                keywords: &["취득세", "유상승계취득", "과세표준", "사실상취득가격", "시가인정액"],
            },
            DefaultLaw {
                title: "지방세법 제10조의4(원시취득의 경우 과세표준)",
                url: "https://www.law.go.kr/법령/지방세법/제10조의4",
                keywords: &["취득세", "원시취득", "과세표준", "사실상취득가격", "시가표준액"],
            },
            DefaultLaw {
                title: "지방세법 제10조의5(무상취득ㆍ유상승계취득·원시취득의 경우 과세표준에 대한 특례)",
                url: "https://www.law.go.kr/법령/지방세법/제10조의5",
                keywords: &["취득세", "과세표준", "특례", "차량", "기계장비"],
            },
            DefaultLaw {
                title: "지방세법 제10조의6(취득으로 보는 경우의 과세표준)",
                url: "https://www.law.go.kr/법령/지방세법/제10조의6",
                keywords: &["취득세", "과세표준", "지목변경", "과점주주", "증가가액"],
            },
            DefaultLaw {
                title: "지방세법 제10조의7(취득의 시기)",
                url: "https://www.law.go.kr/법령/지방세법/제10조의7",
                keywords: &["취득세", "취득시기", "취득유형별", "대통령령", "규정"],
            },
            DefaultLaw {
                title: "지방세법 제11조(부동산 취득의 세율)",
                url: "https://www.law.go.kr/법령/지방세법/제11조",
                keywords: &["부동산", "취득", "세율", "상속", "무상취득"],
            },
            DefaultLaw {
                title: "지방세법 제12조(부동산 외 취득의 세율)",
                url: "https://www.law.go.kr/법령/지방세법/제12조",
                keywords: &["부동산외", "취득", "세율", "선박", "차량"],
            },
            DefaultLaw {
                title: "지방세법 제13조(과밀억제권역 안 취득 등 중과)",
                url: "https://www.law.go.kr/법령/지방세법/제13조",
                keywords: &["과밀억제권역", "취득", "중과", "본점", "공장"],
            },
            DefaultLaw {
                title: "지방세법 제13조의2(법인의 주택 취득 등 중과)",
                url: "https://www.law.go.kr/법령/지방세법/제13조의2",
                keywords: &["법인", "주택취득", "중과", "1세대2주택", "조정대상지역"],
            },
            DefaultLaw {
                title: "지방세법 제13조의3(주택 수의 판단 범위)",
                url: "https://www.law.go.kr/법령/지방세법/제13조의3",
                keywords: &["주택수", "판단범위", "신탁", "조합원입주권", "주택분양권"],
            },
            DefaultLaw {
                title: "지방세법 제14조(조례에 따른 세율 조정)",
                url: "https://www.law.go.kr/법령/지방세법/제14조",
                keywords: &["세율조정", "조례", "지방자치단체", "100분의50", "가감"],
            },
            DefaultLaw {
                title: "지방세법 제15조(세율의 특례)",
                url: "https://www.law.go.kr/법령/지방세법/제15조",
                keywords: &["세율", "특례", "환매등기", "상속", "법인합병"],
            },
            DefaultLaw {
                title: "지방세법 제16조(세율 적용)",
                url: "https://www.law.go.kr/법령/지방세법/제16조",
                keywords: &["세율적용", "토지", "건축물", "취득", "추징"],
            },
            DefaultLaw {
                title: "지방세법 제17조(면세점)",
                url: "https://www.law.go.kr/법령/지방세법/제17조",
                keywords: &["취득세", "면세점", "취득가액", "50만원", "부과"],
            },
        ],
    },
    DefaultSection {
        title: "지방세법 - 부과ㆍ징수",
        laws: &[
            DefaultLaw {
                title: "지방세법 제18조(징수방법)",
                url: "https://www.law.go.kr/법령/지방세법/제18조",
                keywords: &["취득세", "징수방법", "신고납부", "규정", "방법"],
            },
            DefaultLaw {
                title: "지방세법 제19조(통보 등)",
                url: "https://www.law.go.kr/법령/지방세법/제19조",
                keywords: &["취득세", "과세물건", "매각", "통보", "신고"],
            },
            DefaultLaw {
                title: "지방세법 제20조(신고 및 납부)",
                url: "https://www.law.go.kr/법령/지방세법/제20조",
                keywords: &["취득세", "신고", "납부", "취득일", "과세표준"],
            },
            DefaultLaw {
                title: "지방세법 제21조(부족세액의 추징 및 가산세)",
                url: "https://www.law.go.kr/법령/지방세법/제21조",
                keywords: &["취득세", "부족세액", "추징", "가산세", "신고의무"],
            },
            DefaultLaw {
                title: "지방세법 제22조(등기자료의 통보)",
                url: "https://www.law.go.kr/법령/지방세법/제22조",
                keywords: &["등기자료", "통보", "등기등록관서", "납세지", "지방자치단체"],
            },
            DefaultLaw {
                title: "지방세법 제22조의2(장부 등의 작성과 보존)",
                url: "https://www.law.go.kr/법령/지방세법/제22조의2",
                keywords: &["장부", "작성", "보존", "취득당시가액", "증거서류"],
            },
            DefaultLaw {
                title: "지방세법 제22조의3(가족관계등록 전산정보 등의 공동이용)",
                url: "https://www.law.go.kr/법령/지방세법/제22조의3",
                keywords: &["가족관계등록", "전산정보", "공동이용", "주택소유관계", "확인"],
            },
            DefaultLaw {
                title: "지방세법 제22조의4(증여세 관련 자료의 통보)",
                url: "https://www.law.go.kr/법령/지방세법/제22조의4",
                keywords: &["증여세", "관련자료", "통보", "부동산", "부과징수"],
            },
        ],
    },
];

/// Build the default catalog
pub fn default_catalog() -> Catalog {
    Catalog::new(
        LOCAL_TAX_ACT
            .iter()
            .map(|section| {
                LawSection::new(
                    section.title,
                    section
                        .laws
                        .iter()
                        .map(|law| {
                            LawEntry::new(
                                law.title,
                                law.url,
                                law.keywords.iter().map(|k| k.to_string()).collect(),
                            )
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}
