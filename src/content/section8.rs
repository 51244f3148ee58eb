use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

pub static FULL_STACK_INTEGRATION: Section = Section {
    title: "Full-Stack Integration",
    description: "Connecting a React front-end to an ASP.NET Core API with shared contracts, and testing both sides.",
    lessons: &[
        Lesson {
            title: "Calling the API from React",
            description: "A typed client layer between components and HTTP.",
            sections: &[
                SubSection {
                    title: "A typed fetch wrapper",
                    explanation: "<p>Centralise HTTP calls in one module. Components call <code>api.getTodos()</code> and never build URLs or parse JSON themselves.</p>",
                    code_example: Some(
                        r#"async function request<T>(path: string, init?: RequestInit): Promise<T> {
  const res = await fetch(`/api${path}`, {
    headers: { "Content-Type": "application/json" },
    ...init,
  });
  if (!res.ok) throw new Error(`${res.status} ${res.statusText}`);
  return (await res.json()) as T;
}

export const api = {
  getTodos: () => request<Todo[]>("/todos"),
  addTodo: (todo: NewTodo) => request<Todo>("/todos", { method: "POST", body: JSON.stringify(todo) }),
};"#,
                    ),
                },
                SubSection {
                    title: "CORS and the development proxy",
                    explanation: "<p>During development the front-end and API run on different ports. Either proxy <code>/api</code> through the front-end dev server or enable CORS for the dev origin on the API. Never allow every origin in production.</p>",
                    code_example: Some(
                        r#"builder.Services.AddCors(o => o.AddPolicy("dev", p =>
    p.WithOrigins("http://localhost:5173").AllowAnyHeader().AllowAnyMethod()));

app.UseCors("dev");"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Replace direct fetch calls in the todo app with the typed api module and show a retry button when a request fails.",
            }),
        },
        Lesson {
            title: "Shared Contracts",
            description: "Keeping C# DTOs and TypeScript types in step.",
            sections: &[
                SubSection {
                    title: "JSON naming",
                    explanation: "<p>ASP.NET Core serialises properties in <em>camelCase</em> by default, so a C# <code>DueDate</code> arrives as <code>dueDate</code>. Dates travel as ISO 8601 strings, not <code>Date</code> objects.</p>",
                    code_example: Some(
                        r#"// C#
public record TodoDto(int Id, string Title, bool Done, DateTime? DueDate);

// TypeScript
interface TodoDto {
  id: number;
  title: string;
  done: boolean;
  dueDate: string | null;
}"#,
                    ),
                },
                SubSection {
                    title: "Generating clients from OpenAPI",
                    explanation: "<p>Hand-written types drift. Expose an OpenAPI document from the API and generate the TypeScript types from it in the build, so a renamed property becomes a compile error in the front-end.</p>",
                    code_example: None,
                },
            ],
            code_example: None,
            exercise: None,
        },
        Lesson {
            title: "Testing Both Sides",
            description: "Unit and integration tests for the API and the UI.",
            sections: &[
                SubSection {
                    title: "API integration tests",
                    explanation: "<p><code>WebApplicationFactory</code> hosts the API in memory so tests can send real HTTP requests without a network port.</p>",
                    code_example: Some(
                        r#"public class TodoApiTests(WebApplicationFactory<Program> factory)
    : IClassFixture<WebApplicationFactory<Program>>
{
    [Fact]
    public async Task Unknown_todo_returns_404()
    {
        var client = factory.CreateClient();
        var res = await client.GetAsync("/todos/999");
        Assert.Equal(HttpStatusCode.NotFound, res.StatusCode);
    }
}"#,
                    ),
                },
                SubSection {
                    title: "Component tests",
                    explanation: "<p>React Testing Library renders components and queries them the way a user would: by role, label and text. Mock the api module rather than <code>fetch</code>.</p>",
                    code_example: Some(
                        r#"test("shows todos from the api", async () => {
  vi.spyOn(api, "getTodos").mockResolvedValue([{ id: 1, title: "Write tests", done: false }]);
  render(<TodoList />);
  expect(await screen.findByText("Write tests")).toBeInTheDocument();
});"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Write one API integration test for POST /todos validation and one component test for the empty state of TodoList.",
            }),
        },
    ],
    challenge: Some(Challenge {
        description: "Ship a full-stack reading list: ASP.NET Core API plus React front-end.",
        requirements: &[
            "The API exposes CRUD endpoints for books with validation problems on bad input",
            "The front-end uses a typed client and never calls fetch from components",
            "TypeScript types match the C# DTOs, including nullable fields",
            "At least one integration test per endpoint and one component test per page",
        ],
        starter_code: r#"// api/Program.cs
var builder = WebApplication.CreateBuilder(args);
var app = builder.Build();
app.Run();

// web/src/api.ts
export const api = {
  // TODO
};"#,
    }),
};
